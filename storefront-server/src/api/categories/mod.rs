//! Category API

use axum::{Router, extract::State, routing::get};

use crate::api::{ApiResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(list))
}

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<String>>> {
    let categories = state.catalog.categories().await?;
    Ok(ApiResponse::success(categories))
}
