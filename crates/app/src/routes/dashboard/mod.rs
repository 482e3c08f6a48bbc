pub mod admin;
pub mod delivery;
pub mod management;
pub mod staff;

use dioxus::prelude::*;
use shared_types::UserRole;

use crate::state::use_session;

/// Role-adaptive dashboard — renders the variant for the session's role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let role = session.role().unwrap_or(UserRole::Staff);

    match role {
        UserRole::Admin => rsx! { admin::AdminDashboard {} },
        UserRole::Staff => rsx! { staff::StaffDashboard {} },
        UserRole::Management => rsx! { management::ManagementDashboard {} },
        UserRole::Delivery => rsx! { delivery::DeliveryDashboard {} },
    }
}
