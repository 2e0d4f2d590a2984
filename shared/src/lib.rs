//! Shared types for the storefront
//!
//! Product model, the catalog query pipeline, the synthetic sales series,
//! and the error/response types used by both the catalog client and the
//! storefront server.

pub mod analytics;
pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use axum::Json;
pub use http;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, CatalogError, CatalogResult};
pub use models::{Product, Rating, Theme};
pub use query::{FilterSpec, ListingParams, PageSpec, PagedResult, SortField, SortOrder, SortSpec};
