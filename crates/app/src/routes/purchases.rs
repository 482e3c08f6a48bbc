use dioxus::prelude::*;

use crate::state::use_search;

const SAMPLE_PURCHASES: &[(&str, &str, &str)] = &[
    ("P-2207", "Atlas Wholesale", "received"),
    ("P-2208", "Greenfield Produce", "ordered"),
    ("P-2209", "Atlas Wholesale", "ordered"),
];

/// Purchases list, filtered by the shared search keyword.
#[component]
pub fn Purchases() -> Element {
    let search = use_search();
    let keyword = search.keyword().to_lowercase();

    let rows: Vec<&(&str, &str, &str)> = SAMPLE_PURCHASES
        .iter()
        .filter(|(id, supplier, status)| {
            keyword.is_empty()
                || id.to_lowercase().contains(&keyword)
                || supplier.to_lowercase().contains(&keyword)
                || status.contains(&keyword)
        })
        .collect();

    rsx! {
        div { class: "page page-purchases",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Purchase" }
                        th { "Supplier" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (id , supplier , status) in rows.iter() {
                        tr {
                            td { "{id}" }
                            td { "{supplier}" }
                            td { span { class: "status status-{status}", "{status}" } }
                        }
                    }
                }
            }
            if rows.is_empty() {
                p { class: "empty-note", "No purchases match the current filter." }
            }
        }
    }
}
