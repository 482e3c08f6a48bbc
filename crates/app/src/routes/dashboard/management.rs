use dioxus::prelude::*;

use crate::routes::Route;

/// Management dashboard: read-oriented overview.
#[component]
pub fn ManagementDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-management",
            h2 { "Overview" }
            p { "Sales and purchase activity across the selected workspace." }

            div { class: "dashboard-links",
                Link { to: Route::Sales {}, class: "dashboard-card", "Sales activity" }
                Link { to: Route::Purchases {}, class: "dashboard-card", "Purchase activity" }
            }
        }
    }
}
