use std::sync::Arc;

use catalog_client::{CatalogSource, ProductService};
use shared::error::CatalogResult;
use shared::models::Product;

use crate::core::{Config, Result};
use crate::services::CatalogSnapshot;

/// Catalog source as held by the server; any implementation can be injected
pub type SharedSource = Arc<dyn CatalogSource>;

/// Server state - shared handles for every request handler
///
/// Cloning is cheap: everything behind it is reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Config (immutable) |
/// | catalog | ProductService over the injected source |
/// | snapshot | lazily loaded catalog copy for listing and detail views |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: ProductService<SharedSource>,
    pub snapshot: Arc<CatalogSnapshot>,
}

impl ServerState {
    /// Build state around an already constructed source
    pub fn new(config: Config, source: SharedSource) -> Self {
        let snapshot = Arc::new(CatalogSnapshot::new(config.cache_ttl()));
        Self {
            config,
            catalog: ProductService::new(source),
            snapshot,
        }
    }

    /// Build state with the HTTP catalog source described by `config`
    pub fn initialize(config: &Config) -> Result<Self> {
        let source = config.client_config().build_http_source()?;
        tracing::info!(base_url = %source.base_url(), "Catalog source configured");
        Ok(Self::new(config.clone(), Arc::new(source)))
    }

    /// Catalog snapshot, refreshed when stale
    pub async fn products(&self) -> CatalogResult<Arc<Vec<Product>>> {
        self.snapshot.products(self.catalog.source()).await
    }

    /// Load the snapshot ahead of the first request.
    ///
    /// An unreachable upstream is not fatal at startup; requests retry it.
    pub async fn warm_up(&self) {
        if let Err(e) = self.products().await {
            tracing::warn!(error = %e, "Catalog not loaded at startup");
        }
    }
}
