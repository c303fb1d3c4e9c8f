//! The contact API: stateless HTTP handlers over a shared [`ContactStore`].
//!
//! One handler per operation; each validates input, calls the store, and
//! maps failures to status codes with a `{error, details?}` JSON envelope.
//! The router carries a permissive CORS layer so the API is reachable from
//! any origin.

mod error;
mod handlers;

pub use error::{ApiError, ErrorBody};

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;

use crate::store::ContactStore;

/// Shared application state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

/// Build the contact API router.
///
/// Routes:
/// - `GET  /`                  liveness, plain text
/// - `GET  /api/contacts`      full collection, creation time descending
/// - `POST /api/contacts`      create, 201 on success
/// - `PUT  /api/contacts/{id}` partial update
/// - `DELETE /api/contacts/{id}` delete
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            put(handlers::update_contact).delete(handlers::delete_contact),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
