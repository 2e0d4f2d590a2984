//! Error codes carried in API responses
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 9xxx: System and upstream errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    /// Request could not be read (malformed query string, path or body)
    ValidationFailed = 2,

    // ==================== 6xxx: Catalog ====================
    ProductNotFound = 6001,
    InvalidProductId = 6002,
    InvalidCategory = 6101,
    InvalidSearchQuery = 6201,
    InvalidPage = 6301,

    // ==================== 9xxx: System ====================
    /// Catalog service could not be reached or sent an unreadable body
    NetworkError = 9003,
    /// Remote catalog answered with a non-success status
    UpstreamError = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::ValidationFailed => "Validation failed",

            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::InvalidProductId => "Product id must be positive",
            ErrorCode::InvalidCategory => "Category must not be blank",
            ErrorCode::InvalidSearchQuery => "Search query must not be blank",
            ErrorCode::InvalidPage => "Page number and page size must be at least 1",

            ErrorCode::NetworkError => "Catalog service is unreachable",
            ErrorCode::UpstreamError => "Catalog service returned an error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),

            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::InvalidProductId),
            6101 => Ok(ErrorCode::InvalidCategory),
            6201 => Ok(ErrorCode::InvalidSearchQuery),
            6301 => Ok(ErrorCode::InvalidPage),

            9003 => Ok(ErrorCode::NetworkError),
            9006 => Ok(ErrorCode::UpstreamError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
