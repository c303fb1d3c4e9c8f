use std::sync::Arc;

use contactflow::{
    api::{AppState, router},
    client::ContactClient,
    store::{ContactStore, InMemory},
};

/// Start a contact API server backed by a fresh in-memory store on an
/// ephemeral port, returning its base URL.
pub async fn spawn_server() -> String {
    spawn_server_with_store(Arc::new(InMemory::new())).await
}

/// Start a contact API server over the given store.
///
/// The server task runs until the test runtime shuts down.
pub async fn spawn_server_with_store(store: Arc<dyn ContactStore>) -> String {
    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{addr}")
}

/// A ContactClient pointed at a test server.
pub fn client_for(base_url: &str) -> ContactClient {
    ContactClient::new(base_url)
}

/// A base URL nothing listens on, for unreachable-server tests.
pub async fn unreachable_url() -> String {
    // Bind and immediately drop a listener so the port is known-dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{addr}")
}
