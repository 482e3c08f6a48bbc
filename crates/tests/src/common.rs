use axum::Router;

/// A mock accounts API listening on an ephemeral local port.
/// The server task is aborted when the handle drops.
pub struct MockApi {
    pub base_url: String,
    server: tokio::task::JoinHandle<()>,
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Serve a router on 127.0.0.1:0 and return its base URL.
pub async fn serve(router: Router) -> MockApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read mock address");

    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server stopped");
    });

    MockApi {
        base_url: format!("http://{}/", addr),
        server,
    }
}

/// Base URL that refuses connections, for transport-failure tests.
/// Port 1 is reserved and nothing listens on it.
pub fn unreachable_base_url() -> String {
    "http://127.0.0.1:1/".to_string()
}
