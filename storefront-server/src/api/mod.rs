//! API routes
//!
//! - [`health`] - liveness
//! - [`products`] - listing, search, category and detail views
//! - [`categories`] - category list
//! - [`preferences`] - theme cookie

pub mod categories;
pub mod health;
pub mod preferences;
pub mod products;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub use crate::utils::{ApiResponse, AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(categories::router())
        .merge(preferences::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
