//! Serve command - runs the ContactFlow API server.

use std::sync::Arc;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

use contactflow::{
    api::{AppState, router},
    store::{ContactStore, InMemory},
};

use crate::cli::ServeArgs;

/// Run the ContactFlow server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Open the store. A missing file starts empty; a corrupt file is
    // startup-fatal rather than served over.
    let store = InMemory::open(&args.db_path).await?;
    tracing::info!(path = %args.db_path.display(), contacts = store.len().await, "store opened");

    let store: Arc<dyn ContactStore> = Arc::new(store);
    let app = router(AppState::new(store));

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    // Print startup message
    println!(
        "ContactFlow server running on http://localhost:{}",
        local_addr.port()
    );
    println!();
    println!("Available endpoints:");
    println!("  GET    /                     - Liveness check");
    println!("  GET    /api/contacts         - List contacts (newest first)");
    println!("  POST   /api/contacts         - Create a contact");
    println!("  PUT    /api/contacts/{{id}}    - Update a contact");
    println!("  DELETE /api/contacts/{{id}}    - Delete a contact");
    println!();
    println!("Press Ctrl+C to shutdown");

    // Every mutation is written through to the database file, so shutdown
    // only needs to stop accepting connections.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
