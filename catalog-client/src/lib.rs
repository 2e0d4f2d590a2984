//! Catalog Client - data source for the remote product catalog
//!
//! Provides the [`CatalogSource`] capability, its HTTP implementation, an
//! in-memory implementation for tests and offline use, and the
//! [`ProductService`] business layer.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod service;
pub mod source;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::HttpCatalogSource;
pub use memory::StaticCatalogSource;
pub use service::{ProductService, find_product};
pub use source::CatalogSource;

// Re-export shared types for convenience
pub use shared::error::{CatalogError, CatalogResult};
pub use shared::models::{Product, Rating};
