use dioxus::prelude::*;

const SAMPLE_DELIVERIES: &[(&str, &str, &str)] = &[
    ("D-310", "Harbor Cafe", "out for delivery"),
    ("D-311", "Northside Grocer", "queued"),
];

/// Delivery queue.
#[component]
pub fn Deliveries() -> Element {
    rsx! {
        div { class: "page page-deliveries",
            ul { class: "delivery-list",
                for (id , destination , status) in SAMPLE_DELIVERIES.iter() {
                    li { class: "delivery-item",
                        span { class: "delivery-id", "{id}" }
                        span { class: "delivery-destination", "{destination}" }
                        span { class: "delivery-status", "{status}" }
                    }
                }
            }
        }
    }
}
