//! Product API module

mod handler;

pub use handler::ProductDetail;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/search", get(handler::search))
        .route("/category/{category}", get(handler::list_by_category))
        .route("/{id}", get(handler::get_by_id))
}
