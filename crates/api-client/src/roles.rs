use serde_json::Value;
use shared_types::ApiError;

use crate::config::{join_url, ApiConfig};
use crate::http::dispatch;
use crate::token::SharedTokenStore;

/// Path of the roles endpoint relative to the API base URL.
pub const ROLES_ENDPOINT: &str = "accounts/roles/";

/// Fallback error body when the server gives no structured failure.
pub const ROLES_FALLBACK_DETAIL: &str = "Unknown error fetching roles";

/// Client for the accounts roles endpoint.
///
/// The bearer token comes from the injected [`TokenStore`] on every call, so
/// the client always sends whatever credential is current at call time.
///
/// [`TokenStore`]: crate::token::TokenStore
#[derive(Clone)]
pub struct RolesClient {
    http: reqwest::Client,
    base_url: String,
    tokens: SharedTokenStore,
}

impl RolesClient {
    pub fn new(config: &ApiConfig, tokens: SharedTokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            tokens,
        }
    }

    /// Fetch the list of available roles. The response is opaque to this
    /// client and passed through verbatim. Requests with no stored token go
    /// out without an Authorization header and get the server's 401 back,
    /// normalized like any other failure.
    #[tracing::instrument(skip(self))]
    pub async fn get_roles(&self) -> Result<Value, ApiError> {
        let mut request = self.http.get(join_url(&self.base_url, ROLES_ENDPOINT));
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        dispatch(request, ROLES_FALLBACK_DETAIL).await
    }
}
