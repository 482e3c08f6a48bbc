use std::sync::Arc;

use api_client::{ApiClients, ApiConfig, SharedTokenStore};
use dioxus::prelude::*;

mod nav;
mod routes;
mod state;
mod storage;
mod workspace_picker;
mod workspaces;

use routes::Route;
use state::{SearchState, SessionState};
use storage::BrowserTokenStore;

/// Selected workspace context shared across all pages. Display-only; the
/// picker writes it, the sidebar header reads it.
#[derive(Clone, Copy)]
pub struct WorkspaceContext {
    pub workspace_id: Signal<String>,
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Explicit state containers, injected via context rather than ambient
    // globals — tests build their own Session/SearchFilter instances.
    use_context_provider(SessionState::new);
    use_context_provider(SearchState::new);

    use_context_provider(|| -> SharedTokenStore { Arc::new(BrowserTokenStore::new()) });
    let tokens = use_context::<SharedTokenStore>();

    // One client bundle for the whole app; base URL comes from the
    // environment at startup.
    use_context_provider(move || ApiClients::new(&ApiConfig::from_env(), tokens.clone()));

    use_context_provider(|| WorkspaceContext {
        workspace_id: Signal::new(workspaces::WORKSPACES[0].id.to_string()),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
