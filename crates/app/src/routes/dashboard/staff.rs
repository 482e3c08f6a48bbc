use dioxus::prelude::*;

use crate::routes::Route;

/// Staff dashboard: day-to-day entry points.
#[component]
pub fn StaffDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-staff",
            h2 { "Today" }
            p { "Record sales and purchases as they happen." }

            div { class: "dashboard-links",
                Link { to: Route::Sales {}, class: "dashboard-card", "New sale" }
                Link { to: Route::Purchases {}, class: "dashboard-card", "New purchase" }
                Link { to: Route::Deliveries {}, class: "dashboard-card", "Deliveries" }
            }
        }
    }
}
