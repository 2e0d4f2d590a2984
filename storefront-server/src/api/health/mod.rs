//! Health check route
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | liveness and catalog snapshot status |

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::api::ApiResponse;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests
    status: &'static str,
    version: &'static str,
    /// Whether a catalog snapshot has been loaded yet
    catalog_loaded: bool,
}

pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog_loaded: state.snapshot.is_loaded(),
    })
}
