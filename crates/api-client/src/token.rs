use std::sync::{Arc, RwLock};

/// Fixed key under which the bearer token is persisted client-side.
/// Written on login, read by the roles client, cleared on logout.
pub const ACCESS_TOKEN_KEY: &str = "opsdesk_access_token";

/// Credential provider for authorized requests.
///
/// The roles client reads through this trait on every call rather than
/// capturing the token at construction time, so a login or logout between two
/// calls is always reflected in the next request.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Shared handle passed to clients and provided through UI context.
pub type SharedTokenStore = Arc<dyn TokenStore + Send + Sync>;

/// In-memory token store for native targets and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}
