use dioxus::prelude::*;

use crate::state::use_session;
use crate::workspaces::workspace_or_default;
use crate::WorkspaceContext;

/// Profile and workspace summary.
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let ctx = use_context::<WorkspaceContext>();

    let workspace = workspace_or_default(&ctx.workspace_id.read());

    rsx! {
        div { class: "page page-settings",
            if let Some(user) = session.user() {
                div { class: "settings-card",
                    h2 { "Profile" }
                    dl {
                        dt { "Name" }
                        dd { "{user.display_name}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Role" }
                        dd { "{user.role}" }
                    }
                }
            }

            div { class: "settings-card",
                h2 { "Workspace" }
                dl {
                    dt { "Name" }
                    dd { "{workspace.name}" }
                    dt { "Plan" }
                    dd {
                        if workspace.plan.is_empty() { "—" } else { "{workspace.plan}" }
                    }
                }
            }
        }
    }
}
