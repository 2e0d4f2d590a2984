//! Product service - catalog business rules over a [`CatalogSource`]

use shared::error::{Argument, CatalogError, CatalogResult};
use shared::models::Product;
use shared::query::FilterSpec;

use crate::source::CatalogSource;

/// Business operations the storefront needs, on top of any catalog source.
///
/// The source is injected; tests hand in a `StaticCatalogSource`.
#[derive(Debug, Clone)]
pub struct ProductService<S> {
    source: S,
}

impl<S: CatalogSource> ProductService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn products(&self) -> CatalogResult<Vec<Product>> {
        self.source.fetch_all().await
    }

    pub async fn categories(&self) -> CatalogResult<Vec<String>> {
        self.source.fetch_categories().await
    }

    pub async fn products_in_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.source.fetch_by_category(category).await
    }

    pub async fn product(&self, id: i64) -> CatalogResult<Product> {
        self.source.fetch_by_id(id).await
    }

    /// Products whose title or description contains `query`, ignoring case.
    ///
    /// A blank query is an `InvalidArgument`, never an empty success.
    pub async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::invalid_argument(
                Argument::SearchQuery,
                "Search query must not be blank",
            ));
        }

        let products = self.source.fetch_all().await?;
        let filter = FilterSpec::new().search(query);
        let found = filter.apply(&products);
        tracing::debug!(query, found = found.len(), "Catalog search");
        Ok(found)
    }
}

/// Look a product up in an already fetched list
pub fn find_product(products: &[Product], id: u64) -> CatalogResult<&Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::product_not_found(id))
}
