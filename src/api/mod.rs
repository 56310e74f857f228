//! HTTP API server

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// Every response carries permissive CORS headers so browser pages on
/// any origin can call the API directly.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/guestbook",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/guestbook/:id",
            put(handlers::update_entry).delete(handlers::delete_entry),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Convenience helper wrapping a bare record store
pub fn create_store_router(store: Arc<dyn RecordStore>) -> Router {
    create_router(AppState::new(store))
}
