//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ProductNotFound => StatusCode::NOT_FOUND,

            // Upstream answered, but not with success
            Self::UpstreamError => StatusCode::BAD_GATEWAY,

            // Transient, client can retry
            Self::NetworkError => StatusCode::SERVICE_UNAVAILABLE,

            Self::ValidationFailed
            | Self::InvalidProductId
            | Self::InvalidCategory
            | Self::InvalidSearchQuery
            | Self::InvalidPage => StatusCode::BAD_REQUEST,
        }
    }
}
