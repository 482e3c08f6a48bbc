use dioxus::prelude::*;

use crate::routes::Route;

/// Rebuild the unmatched path as the address bar showed it.
fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Fallback page for addresses outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = requested_path(&route);

    rsx! {
        div { class: "missing-route",
            div { class: "missing-route-card",
                h1 { class: "missing-route-heading", "Nothing at this address" }
                p { class: "missing-route-detail",
                    "OpsDesk has no screen at "
                    code { "{path}" }
                    ". The link may be stale, or the page may have moved."
                }
                Link {
                    to: Route::Dashboard {},
                    class: "missing-route-home",
                    "Go to the dashboard"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_path_rebuilds_leading_slash() {
        let segments = vec!["sales".to_string(), "archived".to_string()];
        assert_eq!(requested_path(&segments), "/sales/archived");
        assert_eq!(requested_path(&[]), "/");
    }
}
