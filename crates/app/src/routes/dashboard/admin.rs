use dioxus::prelude::*;

use crate::routes::Route;

/// Admin dashboard: shortcuts into every back-office area.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-admin",
            h2 { "Administration" }
            p { "Manage the catalog, locations, and user accounts." }

            div { class: "dashboard-links",
                Link { to: Route::Sales {}, class: "dashboard-card", "Review sales" }
                Link { to: Route::Purchases {}, class: "dashboard-card", "Review purchases" }
                Link { to: Route::Categories {}, class: "dashboard-card", "Edit categories" }
                Link { to: Route::Locations {}, class: "dashboard-card", "Edit locations" }
                Link { to: Route::Users {}, class: "dashboard-card", "Manage users" }
            }
        }
    }
}
