//! Product API Handlers

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use catalog_client::find_product;
use catalog_client::source::check_product_id;
use serde::{Deserialize, Serialize};
use shared::analytics::{MonthlySales, SalesSummary, sales_series, summarize};
use shared::models::Product;
use shared::query::{ListingParams, PagedResult, query_listing};

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;

/// Product detail view: the product with its sales figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    pub sales: Vec<MonthlySales>,
    pub summary: SalesSummary,
}

impl ProductDetail {
    pub fn new(product: Product) -> Self {
        let sales = sales_series(&product);
        let summary = summarize(&sales);
        Self {
            product,
            sales,
            summary,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/products - filtered, sorted, paged listing over the snapshot
pub async fn list(
    State(state): State<ServerState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> AppResult<ApiResponse<PagedResult<Product>>> {
    let Query(params) = params.map_err(|e| AppError::validation(e.body_text()))?;
    let products = state.products().await?;
    let page = query_listing(&products, params)?;
    Ok(ApiResponse::success(page))
}

/// GET /api/products/search?q= - title/description search
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let found = state.catalog.search(&query.q).await?;
    Ok(ApiResponse::success(found))
}

/// GET /api/products/category/{category}
pub async fn list_by_category(
    State(state): State<ServerState>,
    category: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let Path(category) = category.map_err(|e| AppError::validation(e.body_text()))?;
    let products = state.catalog.products_in_category(&category).await?;
    Ok(ApiResponse::success(products))
}

/// GET /api/products/{id} - detail view with the sales series
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let Path(id) = id.map_err(|e| AppError::validation(e.body_text()))?;
    let id = check_product_id(id)?;
    let products = state.products().await?;
    let product = find_product(&products, id)?.clone();
    Ok(ApiResponse::success(ProductDetail::new(product)))
}
