//! Error system for the storefront
//!
//! - [`CatalogError`]: the tagged failure of every catalog operation
//! - [`ErrorCode`]: numeric codes reported to API callers
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`] / [`ApiResponse`]: the HTTP boundary representation
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, Argument, CatalogError, ErrorCode};
//!
//! let err = CatalogError::invalid_argument(Argument::ProductId, "must be positive");
//! assert_eq!(err.code(), ErrorCode::InvalidProductId);
//!
//! let app: AppError = err.into();
//! assert_eq!(app.http_status().as_u16(), 400);
//! ```

mod catalog;
mod category;
mod codes;
mod http;
mod types;

pub use catalog::{Argument, CatalogError, CatalogResult};
pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
