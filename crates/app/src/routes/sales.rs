use dioxus::prelude::*;

use crate::state::use_search;

/// Placeholder sale rows until the inventory endpoints are wired in.
const SAMPLE_SALES: &[(&str, &str, &str)] = &[
    ("S-1041", "Walk-in customer", "complete"),
    ("S-1042", "Harbor Cafe", "pending"),
    ("S-1043", "Northside Grocer", "complete"),
    ("S-1044", "Walk-in customer", "refunded"),
];

/// Sales list, filtered by the shared search keyword.
#[component]
pub fn Sales() -> Element {
    let search = use_search();
    let keyword = search.keyword().to_lowercase();

    let rows: Vec<&(&str, &str, &str)> = SAMPLE_SALES
        .iter()
        .filter(|(id, customer, status)| {
            keyword.is_empty()
                || id.to_lowercase().contains(&keyword)
                || customer.to_lowercase().contains(&keyword)
                || status.contains(&keyword)
        })
        .collect();

    rsx! {
        div { class: "page page-sales",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Sale" }
                        th { "Customer" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (id , customer , status) in rows.iter() {
                        tr {
                            td { "{id}" }
                            td { "{customer}" }
                            td { span { class: "status status-{status}", "{status}" } }
                        }
                    }
                }
            }
            if rows.is_empty() {
                p { class: "empty-note", "No sales match the current filter." }
            }
        }
    }
}
