use api_client::ApiClients;
use dioxus::prelude::*;
use serde_json::Value;

use crate::state::use_session;

/// Display label for one role descriptor from the roles endpoint. The
/// payload is server-defined, so this only probes the common shapes.
fn role_label(entry: &Value) -> String {
    entry
        .get("name")
        .or_else(|| entry.get("role"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| entry.to_string())
}

/// User administration page. Admin-only; shows the assignable roles fetched
/// live from the accounts API.
#[component]
pub fn Users() -> Element {
    let session = use_session();
    let clients = use_context::<ApiClients>();

    let is_admin = session.role().map(|r| r.is_admin()).unwrap_or(false);

    let roles = use_resource(move || {
        let roles_client = clients.roles.clone();
        async move { roles_client.get_roles().await }
    });

    if !is_admin {
        return rsx! {
            div { class: "page page-users",
                p { class: "empty-note", "User administration is only available to admins." }
            }
        };
    }

    rsx! {
        div { class: "page page-users",
            h2 { "Assignable roles" }
            match &*roles.read() {
                None => rsx! {
                    p { class: "empty-note", "Loading roles..." }
                },
                Some(Ok(body)) => rsx! {
                    ul { class: "role-list",
                        if let Some(entries) = body.as_array() {
                            for entry in entries.iter() {
                                li { class: "role-item", "{role_label(entry)}" }
                            }
                        } else {
                            li { class: "role-item", "{body}" }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "page-error", "Could not load roles: {err.detail()}" }
                },
            }
        }
    }
}
