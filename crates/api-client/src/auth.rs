use serde_json::Value;
use shared_types::{ApiError, LoginRequest};

use crate::config::{join_url, ApiConfig};
use crate::http::dispatch;

/// Path of the login endpoint relative to the API base URL.
pub const LOGIN_ENDPOINT: &str = "api/accounts/login/";

/// Fallback error body when the server gives no structured failure.
pub const LOGIN_FALLBACK_DETAIL: &str = "Unknown error during login";

/// Client for the accounts login endpoint.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Authenticate with a credential pair.
    ///
    /// The response body is server-defined and returned verbatim; callers
    /// extract the token and user from it. Failures are normalized so the
    /// caller always sees a `detail`-shaped body at minimum.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let request = self.http.post(join_url(&self.base_url, LOGIN_ENDPOINT)).json(
            &LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            },
        );

        let result = dispatch(request, LOGIN_FALLBACK_DETAIL).await;
        if result.is_ok() {
            tracing::info!(username, "login succeeded");
        }
        result
    }
}
