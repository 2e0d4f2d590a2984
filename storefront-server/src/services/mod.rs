//! Services held by the server state

pub mod snapshot;

pub use snapshot::CatalogSnapshot;
