//! Router driven in-process with `oneshot` over an in-memory catalog

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use catalog_client::StaticCatalogSource;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{Decimal, Product, Rating};
use storefront_server::{Config, ServerState, build_app};
use tower::ServiceExt;

fn product(id: u64, title: &str, price: i64, category: &str, description: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::from(price),
        description: description.to_string(),
        category: category.to_string(),
        image: format!("https://example.com/img/{id}.jpg"),
        rating: Rating {
            rate: 4.0,
            count: 10,
        },
    }
}

fn app() -> Router {
    let source = StaticCatalogSource::new(vec![
        product(1, "Laptop", 999, "electronics", "A powerful laptop"),
        product(2, "Phone", 699, "electronics", "Latest smartphone"),
        product(3, "T-Shirt", 29, "clothing", "Cotton t-shirt"),
        product(4, "Jeans", 79, "clothing", "Blue denim jeans"),
    ]);
    build_app(ServerState::new(Config::default(), Arc::new(source)))
}

async fn send(request: Request<Body>) -> (StatusCode, http::HeaderMap, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(request).await;
    (status, body)
}

fn titles(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_listing_defaults_sort_by_title() {
    let (status, body) = get("/api/products").await;
    assert_eq!(status, StatusCode::OK);

    let page = &body["data"];
    assert_eq!(titles(&page["data"]), vec!["Jeans", "Laptop", "Phone", "T-Shirt"]);
    assert_eq!(page["total"], 4);
    assert_eq!(page["page"], 1);
    assert_eq!(page["page_size"], 12);
    assert_eq!(page["total_pages"], 1);
}

#[tokio::test]
async fn test_listing_filter_sort_and_page() {
    let (status, body) =
        get("/api/products?category=electronics&sort_by=price&order=asc&page=1&page_size=1").await;
    assert_eq!(status, StatusCode::OK);

    let page = &body["data"];
    assert_eq!(titles(&page["data"]), vec!["Phone"]);
    assert_eq!(page["total"], 2);
    assert_eq!(page["total_pages"], 2);
}

#[tokio::test]
async fn test_listing_price_range_and_search() {
    let (_, body) = get("/api/products?min_price=50&max_price=800&sort_by=price&order=desc").await;
    assert_eq!(titles(&body["data"]["data"]), vec!["Phone", "Jeans"]);

    let (_, body) = get("/api/products?search=DENIM").await;
    assert_eq!(titles(&body["data"]["data"]), vec!["Jeans"]);
}

#[tokio::test]
async fn test_listing_rejects_zero_page() {
    let (status, body) = get("/api/products?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "invalid_argument");
}

#[tokio::test]
async fn test_listing_rejects_malformed_query() {
    let (status, body) = get("/api/products?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body["code"], 0);
}

#[tokio::test]
async fn test_blank_search_is_bad_request() {
    let (status, body) = get("/api/products/search?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["argument"], "query");

    let (status, _) = get("/api/products/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search() {
    let (status, body) = get("/api/products/search?q=smart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body["data"]), vec!["Phone"]);
}

#[tokio::test]
async fn test_products_in_category() {
    let (status, body) = get("/api/products/category/clothing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body["data"]), vec!["T-Shirt", "Jeans"]);
}

#[tokio::test]
async fn test_unreadable_category_uses_error_envelope() {
    // %FF does not decode to UTF-8
    let (status, body) = get("/api/products/category/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["message"].is_string());

    let (status, body) = get("/api/products/category/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6101);
    assert_eq!(body["details"]["argument"], "category");
}

#[tokio::test]
async fn test_product_detail_with_sales() {
    let (status, body) = get("/api/products/3").await;
    assert_eq!(status, StatusCode::OK);

    let detail = &body["data"];
    assert_eq!(detail["product"]["title"], "T-Shirt");
    assert_eq!(detail["sales"].as_array().unwrap().len(), 12);
    assert_eq!(detail["sales"][0]["month"], "Jan");

    let total: u64 = detail["sales"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["sales"].as_u64().unwrap())
        .sum();
    assert_eq!(detail["summary"]["total_sales"], total);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let (status, body) = get("/api/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
    assert_eq!(body["details"]["kind"], "not_found");
    assert_eq!(body["message"], "Product 999 not found");
}

#[tokio::test]
async fn test_invalid_product_id() {
    let (status, _) = get("/api/products/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_categories() {
    let (status, body) = get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["electronics", "clothing"]));
}

#[tokio::test]
async fn test_theme_defaults_to_light() {
    let (status, body) = get("/api/preferences/theme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["theme"], "light");
}

#[tokio::test]
async fn test_theme_read_from_cookie() {
    let request = Request::get("/api/preferences/theme")
        .header(header::COOKIE, "theme=dark")
        .body(Body::empty())
        .unwrap();
    let (_, _, body) = send(request).await;
    assert_eq!(body["data"]["theme"], "dark");
}

#[tokio::test]
async fn test_theme_update_sets_cookie() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/preferences/theme")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"theme":"dark"}"#))
        .unwrap();
    let (status, headers, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["theme"], "dark");
    assert_eq!(
        headers.get(header::SET_COOKIE).unwrap(),
        "theme=dark; Path=/; Max-Age=31536000; SameSite=Lax"
    );
}

#[tokio::test]
async fn test_theme_update_rejects_unknown_value() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/preferences/theme")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"theme":"sepia"}"#))
        .unwrap();
    let (status, headers, _) = send(request).await;

    assert!(status.is_client_error());
    assert!(headers.get(header::SET_COOKIE).is_none());
}
