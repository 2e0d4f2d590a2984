//! HTTP catalog source backed by reqwest

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::error::{CatalogError, CatalogResult};
use shared::models::Product;
use url::Url;

use crate::ClientConfig;
use crate::error::{MapTransportExt, status_text};
use crate::source::{CatalogSource, check_category, check_product_id};

/// Catalog source talking to a fakestoreapi-compatible REST API:
///
/// | Operation | Request |
/// |-----------|---------|
/// | fetch_all | `GET /products` |
/// | fetch_by_id | `GET /products/{id}` |
/// | fetch_by_category | `GET /products/category/{category}` |
/// | fetch_categories | `GET /products/categories` |
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: Url,
    cache_control: String,
}

impl HttpCatalogSource {
    pub fn new(config: &ClientConfig) -> CatalogResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CatalogError::transport(format!("invalid catalog URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::transport(format!(
                "catalog URL {} cannot be a base",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_transport()?;

        Ok(Self {
            client,
            base_url,
            cache_control: format!("max-age={}", config.max_age),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET and decode. `Ok(None)` means a success status with an empty or
    /// `null` body, which the public API uses for unknown ids.
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> CatalogResult<Option<T>> {
        let url = self.url(segments);
        tracing::debug!(url = %url, "Fetching from catalog");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CACHE_CONTROL, &self.cache_control)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_transport()
            .inspect_err(|e| tracing::warn!(url = %url, error = %e, "Catalog request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::http(status.as_u16(), status_text(status)));
        }

        let body = response.text().await.map_transport()?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str(trimmed).map(Some).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog returned a malformed payload");
            CatalogError::transport(format!("malformed catalog payload: {e}"))
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> CatalogResult<Vec<T>> {
        self.get(segments).await?.ok_or_else(|| {
            CatalogError::transport(format!("empty catalog payload for /{}", segments.join("/")))
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        let products: Vec<Product> = self.get_list(&["products"]).await?;
        tracing::debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    async fn fetch_by_id(&self, id: i64) -> CatalogResult<Product> {
        let id = check_product_id(id)?;
        let id_segment = id.to_string();
        self.get(&["products", &id_segment])
            .await?
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    async fn fetch_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let category = check_category(category)?;
        self.get_list(&["products", "category", category]).await
    }

    async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
        self.get_list(&["products", "categories"]).await
    }
}
