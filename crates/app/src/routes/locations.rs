use dioxus::prelude::*;

const SAMPLE_LOCATIONS: &[(&str, &str)] = &[
    ("Main floor", "Aisles 1-12"),
    ("Back room", "Overflow stock"),
    ("Cold storage", "Frozen and chilled"),
];

/// Stock locations.
#[component]
pub fn Locations() -> Element {
    rsx! {
        div { class: "page page-locations",
            ul { class: "location-list",
                for (name , note) in SAMPLE_LOCATIONS.iter() {
                    li { class: "location-item",
                        span { class: "location-name", "{name}" }
                        span { class: "location-note", "{note}" }
                    }
                }
            }
        }
    }
}
