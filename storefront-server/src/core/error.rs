use shared::error::CatalogError;
use thiserror::Error;

/// Failures that stop the server itself; request errors are `AppError`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("catalog source unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
