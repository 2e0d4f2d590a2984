//! Catalog snapshot
//!
//! The listing and detail views work over one in-memory copy of the whole
//! catalog. It is fetched on first use and refetched once it is older than
//! the configured TTL. A failed refetch is surfaced to the caller and a
//! stale copy is never served; the next request tries upstream again.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use catalog_client::CatalogSource;
use shared::error::{CatalogError, CatalogResult};
use shared::models::Product;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
struct Loaded {
    products: Arc<Vec<Product>>,
    fetched_at: Instant,
}

impl Loaded {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Shared, lazily loaded copy of the catalog
///
/// Refreshes are single-flight: one caller goes upstream while the others
/// wait on `refresh` and take its outcome, success or failure. The read
/// lock on `loaded` is never held across an upstream call.
#[derive(Debug)]
pub struct CatalogSnapshot {
    ttl: Duration,
    loaded: RwLock<Option<Loaded>>,
    /// Error of the last finished refresh, `None` after a success
    refresh: Mutex<Option<CatalogError>>,
    /// Finished refresh attempts
    attempts: AtomicU64,
    has_data: AtomicBool,
}

impl CatalogSnapshot {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            loaded: RwLock::new(None),
            refresh: Mutex::new(None),
            attempts: AtomicU64::new(0),
            has_data: AtomicBool::new(false),
        }
    }

    /// Current products, fetching from `source` when missing or stale
    pub async fn products<S>(&self, source: &S) -> CatalogResult<Arc<Vec<Product>>>
    where
        S: CatalogSource + ?Sized,
    {
        if let Some(products) = self.fresh().await {
            return Ok(products);
        }

        let seen = self.attempts.load(Ordering::SeqCst);
        let mut last_error = self.refresh.lock().await;

        // A refresh finished while we queued: share its outcome
        if self.attempts.load(Ordering::SeqCst) != seen {
            if let Some(products) = self.fresh().await {
                return Ok(products);
            }
            if let Some(e) = last_error.as_ref() {
                return Err(e.clone());
            }
        }

        if let Some(products) = self.fresh().await {
            return Ok(products);
        }

        let outcome = source.fetch_all().await;
        self.attempts.fetch_add(1, Ordering::SeqCst);

        match outcome {
            Ok(products) => {
                let products = Arc::new(products);
                tracing::info!(count = products.len(), "Catalog snapshot loaded");
                *self.loaded.write().await = Some(Loaded {
                    products: products.clone(),
                    fetched_at: Instant::now(),
                });
                self.has_data.store(true, Ordering::SeqCst);
                *last_error = None;
                Ok(products)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog snapshot refresh failed");
                *last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    async fn fresh(&self) -> Option<Arc<Vec<Product>>> {
        let guard = self.loaded.read().await;
        guard
            .as_ref()
            .filter(|loaded| loaded.is_fresh(self.ttl))
            .map(|loaded| loaded.products.clone())
    }

    /// Whether a snapshot has ever been loaded; never waits on a refresh
    pub fn is_loaded(&self) -> bool {
        self.has_data.load(Ordering::SeqCst)
    }
}
