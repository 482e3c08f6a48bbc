use dioxus::prelude::*;

use crate::workspaces::{workspace_or_default, WORKSPACES};
use crate::WorkspaceContext;

/// Workspace picker dropdown — shows in the sidebar header.
///
/// The list is static configuration; selecting an entry only updates
/// `WorkspaceContext.workspace_id` for display elsewhere.
#[component]
pub fn WorkspacePicker() -> Element {
    let mut ctx = use_context::<WorkspaceContext>();
    let mut open = use_signal(|| false);
    let mut filter = use_signal(String::new);

    let current_id = ctx.workspace_id.read().clone();
    let current = workspace_or_default(&current_id);

    let q = filter.read().to_lowercase();
    let visible: Vec<&'static crate::workspaces::Workspace> = WORKSPACES
        .iter()
        .filter(|w| q.is_empty() || w.name.to_lowercase().contains(&q))
        .collect();

    let is_open = *open.read();

    rsx! {
        div { class: "workspace-picker",
            div {
                class: "workspace-picker-trigger",
                onclick: move |_| open.set(!is_open),
                span { class: "workspace-picker-logo", "{current.logo}" }
                span { class: "workspace-picker-label", "{current.name}" }
                span { class: "workspace-picker-chevron",
                    if is_open { "\u{25B2}" } else { "\u{25BC}" }
                }
            }

            if is_open {
                div {
                    class: "workspace-backdrop",
                    onclick: move |_| {
                        open.set(false);
                        filter.set(String::new());
                    },
                }

                div { class: "workspace-popover",
                    input {
                        class: "workspace-search-input",
                        r#type: "text",
                        placeholder: "Search workspaces...",
                        value: filter.read().clone(),
                        oninput: move |evt: FormEvent| filter.set(evt.value()),
                    }

                    div { class: "workspace-list",
                        for workspace in visible.iter() {
                            {
                                let id = workspace.id;
                                let is_current = id == current_id;
                                rsx! {
                                    div {
                                        class: if is_current { "workspace-item workspace-item-active" } else { "workspace-item" },
                                        onclick: move |_| {
                                            ctx.workspace_id.set(id.to_string());
                                            open.set(false);
                                            filter.set(String::new());
                                        },
                                        span { class: "workspace-item-logo", "{workspace.logo}" }
                                        span { class: "workspace-item-name", "{workspace.name}" }
                                        if !workspace.plan.is_empty() {
                                            span { class: "workspace-item-plan", "{workspace.plan}" }
                                        }
                                    }
                                }
                            }
                        }

                        if visible.is_empty() {
                            div { class: "workspace-no-results", "No matching workspaces" }
                        }
                    }
                }
            }
        }
    }
}
