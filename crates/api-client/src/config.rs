/// Base URL used when `API_BASE_URL` is not set (local accounts API).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Remote API configuration. One base URL covers both the accounts and
/// inventory endpoints; tests point it at a mock server instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `API_BASE_URL`, falling back to the local
    /// default. On targets without an environment (wasm) the default applies.
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }
}

/// Join a base URL and an endpoint path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
