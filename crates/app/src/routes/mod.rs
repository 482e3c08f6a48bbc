pub mod categories;
pub mod dashboard;
pub mod deliveries;
pub mod locations;
pub mod login;
pub mod not_found;
pub mod purchases;
pub mod sales;
pub mod settings;
pub mod users;

use api_client::SharedTokenStore;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdLayoutDashboard, LdMapPin, LdPackage, LdSettings, LdShoppingCart, LdTags, LdTruck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::UserRole;

use crate::nav::{nav_for_role, NavIcon};
use crate::state::{use_search, use_session};
use crate::workspace_picker::WorkspacePicker;

use categories::Categories;
use dashboard::Dashboard;
use deliveries::Deliveries;
use locations::Locations;
use login::Login;
use not_found::NotFound;
use purchases::Purchases;
use sales::Sales;
use settings::Settings;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/sales")]
    Sales {},
    #[route("/purchases")]
    Purchases {},
    #[route("/deliveries")]
    Deliveries {},
    #[route("/categories")]
    Categories {},
    #[route("/locations")]
    Locations {},
    #[route("/users")]
    Users {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if no session is held.
/// There is no session persistence, so a fresh page load always lands here
/// logged out.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();

    if session.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::Login {});
        rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        }
    }
}

/// Render the lucide icon for a nav entry.
fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        NavIcon::Sales => {
            rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } }
        }
        NavIcon::Purchases => {
            rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } }
        }
        NavIcon::Deliveries => {
            rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } }
        }
        NavIcon::Categories => {
            rsx! { Icon::<LdTags> { icon: LdTags, width: 18, height: 18 } }
        }
        NavIcon::Locations => {
            rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } }
        }
        NavIcon::Users => {
            rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } }
        }
        NavIcon::Settings => {
            rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } }
        }
    }
}

/// Main app layout with sidebar navigation and top bar.
///
/// The sidebar is driven entirely by the static nav configuration for the
/// session's role; the topbar hosts the shared search box.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let mut search = use_search();
    let tokens = use_context::<SharedTokenStore>();

    let role = session.role().unwrap_or(UserRole::Staff);
    let items = nav_for_role(role);
    let current_path = route.to_string();

    let display_name = session
        .user()
        .map(|u| u.display_name)
        .unwrap_or_else(|| "Guest".to_string());

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::Sales {} => "Sales",
        Route::Purchases {} => "Purchases",
        Route::Deliveries {} => "Deliveries",
        Route::Categories {} => "Categories",
        Route::Locations {} => "Locations",
        Route::Users {} => "Users",
        Route::Settings {} => "Settings",
        _ => "",
    };

    let keyword = search.keyword();

    let handle_logout = move |_: MouseEvent| {
        session.logout();
        tokens.clear();
        navigator().push(Route::Login {});
    };

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "OpsDesk" }
                }

                WorkspacePicker {}

                nav { class: "sidebar-nav",
                    for item in items.iter() {
                        {
                            let active = item.path == current_path;
                            let target = item.path.parse::<Route>().unwrap_or(Route::Dashboard {});
                            rsx! {
                                Link { to: target,
                                    div {
                                        class: if active { "sidebar-item sidebar-item-active" } else { "sidebar-item" },
                                        {nav_icon(item.icon)}
                                        span { "{item.title}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "sidebar-footer",
                    span { class: "sidebar-role-badge", "{role.as_str()}" }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    h1 { class: "topbar-title", "{page_title}" }

                    div { class: "topbar-search",
                        input {
                            r#type: "text",
                            placeholder: "Filter...",
                            value: "{keyword}",
                            oninput: move |evt: FormEvent| search.set_keyword(evt.value()),
                        }
                        if !keyword.is_empty() {
                            button {
                                class: "topbar-search-clear",
                                onclick: move |_| search.clear_keyword(),
                                "\u{00D7}"
                            }
                        }
                    }

                    div { class: "topbar-user",
                        span { class: "topbar-user-name", "{display_name}" }
                        button { class: "topbar-logout", onclick: handle_logout, "Sign out" }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
