use api_client::{ApiClients, SharedTokenStore};
use dioxus::prelude::*;
use shared_types::User;

use crate::routes::Route;
use crate::state::use_session;

/// Login page with username/password.
///
/// On success the server's opaque body is picked apart here: the `access`
/// token goes to the persisted token store, the `user` object into the
/// session. The stores themselves never validate anything.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let clients = use_context::<ApiClients>();
    let tokens = use_context::<SharedTokenStore>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in — nothing to do here.
    if session.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = clients.auth.clone();
        let tokens = tokens.clone();

        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            match auth.login(&username(), &password()).await {
                Ok(body) => {
                    if let Some(token) = body.get("access").and_then(|v| v.as_str()) {
                        tokens.set(token);
                    }
                    let user = body
                        .get("user")
                        .cloned()
                        .and_then(|v| serde_json::from_value::<User>(v).ok());
                    match user {
                        Some(user) => {
                            session.set_user(user);
                            navigator().push(Route::Dashboard {});
                        }
                        None => {
                            tracing::warn!("login response carried no usable user object");
                            error_msg.set(Some(
                                "Login succeeded but the account data was unreadable.".to_string(),
                            ));
                        }
                    }
                }
                Err(err) => {
                    error_msg.set(Some(err.detail()));
                }
            }

            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-description", "Enter your credentials to access OpsDesk" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "username", "Username" }
                        input {
                            r#type: "text",
                            id: "username",
                            placeholder: "your.name",
                            value: username(),
                            oninput: move |e: FormEvent| username.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
