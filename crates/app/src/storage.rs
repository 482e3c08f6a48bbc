use api_client::TokenStore;

#[cfg(target_arch = "wasm32")]
use api_client::ACCESS_TOKEN_KEY;

#[cfg(not(target_arch = "wasm32"))]
use api_client::MemoryTokenStore;

/// Token store backed by browser `localStorage` under [`ACCESS_TOKEN_KEY`].
///
/// On non-wasm targets (desktop shell, native tests) there is no
/// `localStorage`, so the store degrades to an in-memory slot with the same
/// contract — the token then lives only as long as the process.
#[derive(Debug, Default)]
pub struct BrowserTokenStore {
    #[cfg(not(target_arch = "wasm32"))]
    fallback: MemoryTokenStore,
}

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
                tracing::warn!("failed to persist access token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        self.fallback.get()
    }

    fn set(&self, token: &str) {
        self.fallback.set(token);
    }

    fn clear(&self) {
        self.fallback.clear();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_store_holds_token_in_memory() {
        let store = BrowserTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc");
        assert_eq!(store.get(), Some("abc".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
