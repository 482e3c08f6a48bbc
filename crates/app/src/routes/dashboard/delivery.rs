use dioxus::prelude::*;

use crate::routes::Route;

/// Delivery dashboard: the queue is the whole job.
#[component]
pub fn DeliveryDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-delivery",
            h2 { "Deliveries" }
            p { "Open deliveries assigned to you." }

            div { class: "dashboard-links",
                Link { to: Route::Deliveries {}, class: "dashboard-card", "Delivery queue" }
            }
        }
    }
}
