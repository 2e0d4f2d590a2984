//! The catalog data source capability

use async_trait::async_trait;
use shared::error::{Argument, CatalogError, CatalogResult};
use shared::models::Product;

/// Read-only access to a product catalog.
///
/// Each call is one independent read with no retries. Argument checks
/// happen before any I/O; see [`check_product_id`] and [`check_category`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every product, unfiltered
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>>;

    /// One product. `InvalidArgument` for `id <= 0`, `NotFound` if absent.
    async fn fetch_by_id(&self, id: i64) -> CatalogResult<Product>;

    /// Products in one category. `InvalidArgument` for a blank category.
    async fn fetch_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Every category name
    async fn fetch_categories(&self) -> CatalogResult<Vec<String>>;
}

pub fn check_product_id(id: i64) -> CatalogResult<u64> {
    u64::try_from(id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            CatalogError::invalid_argument(
                Argument::ProductId,
                format!("Product id must be positive, got {id}"),
            )
        })
}

pub fn check_category(category: &str) -> CatalogResult<&str> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid_argument(
            Argument::Category,
            "Category must not be blank",
        ));
    }
    Ok(trimmed)
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<S> {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        (**self).fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> CatalogResult<Product> {
        (**self).fetch_by_id(id).await
    }

    async fn fetch_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        (**self).fetch_by_category(category).await
    }

    async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
        (**self).fetch_categories().await
    }
}
