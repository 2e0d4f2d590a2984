//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`cookie`] - request cookie lookup

pub mod cookie;
pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult};
