use dioxus::prelude::*;

use crate::state::use_search;

const SAMPLE_CATEGORIES: &[&str] = &["Beverages", "Dry Goods", "Frozen", "Produce", "Supplies"];

/// Category list, filtered by the shared search keyword.
#[component]
pub fn Categories() -> Element {
    let search = use_search();
    let keyword = search.keyword().to_lowercase();

    let names: Vec<&&str> = SAMPLE_CATEGORIES
        .iter()
        .filter(|name| keyword.is_empty() || name.to_lowercase().contains(&keyword))
        .collect();

    rsx! {
        div { class: "page page-categories",
            ul { class: "tag-list",
                for name in names.iter() {
                    li { class: "tag", "{name}" }
                }
            }
            if names.is_empty() {
                p { class: "empty-note", "No categories match the current filter." }
            }
        }
    }
}
