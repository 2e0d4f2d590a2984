//! Mapping of reqwest failures onto [`CatalogError`]

use shared::error::{CatalogError, CatalogResult};

/// Classify a reqwest error that happened before a usable status was read.
///
/// Connection, DNS, timeout and body-decoding failures all land in
/// `TransportError`. Non-success statuses are checked by the caller.
pub fn from_reqwest(err: &reqwest::Error) -> CatalogError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else if err.is_decode() {
        format!("malformed response body: {err}")
    } else {
        err.to_string()
    };
    CatalogError::transport(message)
}

pub(crate) fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Extension for turning reqwest results into catalog results
pub trait MapTransportExt<T> {
    fn map_transport(self) -> CatalogResult<T>;
}

impl<T> MapTransportExt<T> for Result<T, reqwest::Error> {
    fn map_transport(self) -> CatalogResult<T> {
        self.map_err(|err| from_reqwest(&err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(reqwest::StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(
            status_text(reqwest::StatusCode::from_u16(599).unwrap()),
            "599"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Reserve a free port, then release it so nothing listens there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = reqwest::get(format!("http://127.0.0.1:{port}/products"))
            .await
            .unwrap_err();
        let mapped = from_reqwest(&err);
        assert!(
            matches!(mapped, CatalogError::TransportError { .. }),
            "{mapped:?}"
        );
    }
}
