//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity, as served by the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    /// Unit price, never negative
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    /// Category name (open-ended set, e.g. "electronics")
    pub category: String,
    /// Image URI
    pub image: String,
    pub rating: Rating,
}

/// Customer rating summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0-5
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}

impl Product {
    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
