//! Catalog error - the tagged failure value of every catalog operation
//!
//! Callers branch on the variant; nothing in the catalog path panics or
//! retries.

use super::codes::ErrorCode;
use std::fmt;
use thiserror::Error;

/// Which caller-supplied argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    ProductId,
    Category,
    SearchQuery,
    Page,
    PageSize,
}

impl Argument {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ProductId => "id",
            Self::Category => "category",
            Self::SearchQuery => "query",
            Self::Page => "page",
            Self::PageSize => "page_size",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Structurally invalid parameter, rejected before any I/O
    #[error("invalid {argument}: {message}")]
    InvalidArgument { argument: Argument, message: String },

    /// Remote catalog returned a non-success status
    #[error("catalog returned HTTP {status_code}: {message}")]
    HttpError { status_code: u16, message: String },

    /// The call never reached or never returned from the remote catalog
    #[error("catalog transport failure: {message}")]
    TransportError { message: String },

    /// Requested identifier does not exist in the catalog
    #[error("{0}")]
    NotFound(String),
}

impl CatalogError {
    pub fn invalid_argument(argument: Argument, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    pub fn http(status_code: u16, message: impl Into<String>) -> Self {
        Self::HttpError {
            status_code,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    pub fn product_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound(format!("Product {} not found", id))
    }

    /// Stable tag name, for logs and response details
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::HttpError { .. } => "http_error",
            Self::TransportError { .. } => "transport_error",
            Self::NotFound(_) => "not_found",
        }
    }

    /// Error code reported at the API boundary
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { argument, .. } => match argument {
                Argument::ProductId => ErrorCode::InvalidProductId,
                Argument::Category => ErrorCode::InvalidCategory,
                Argument::SearchQuery => ErrorCode::InvalidSearchQuery,
                Argument::Page | Argument::PageSize => ErrorCode::InvalidPage,
            },
            Self::HttpError { .. } => ErrorCode::UpstreamError,
            Self::TransportError { .. } => ErrorCode::NetworkError,
            Self::NotFound(_) => ErrorCode::ProductNotFound,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
