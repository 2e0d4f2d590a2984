//! In-memory catalog source

use async_trait::async_trait;
use shared::error::{CatalogError, CatalogResult};
use shared::models::Product;

use crate::source::{CatalogSource, check_category, check_product_id};

/// Fixed product list served without I/O. Categories are derived from the
/// products in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn fetch_by_id(&self, id: i64) -> CatalogResult<Product> {
        let id = check_product_id(id)?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    async fn fetch_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let category = check_category(category)?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}
