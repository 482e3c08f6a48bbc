pub mod auth;
pub mod config;
pub mod roles;
pub mod token;

mod http;

pub use auth::AuthClient;
pub use config::ApiConfig;
pub use roles::RolesClient;
pub use token::{MemoryTokenStore, SharedTokenStore, TokenStore, ACCESS_TOKEN_KEY};

/// Bundle of all remote-API clients, built once at startup and handed to the
/// UI via context so views never construct clients themselves.
#[derive(Clone)]
pub struct ApiClients {
    pub auth: AuthClient,
    pub roles: RolesClient,
}

impl ApiClients {
    pub fn new(config: &ApiConfig, tokens: SharedTokenStore) -> Self {
        Self {
            auth: AuthClient::new(config),
            roles: RolesClient::new(config, tokens),
        }
    }
}
