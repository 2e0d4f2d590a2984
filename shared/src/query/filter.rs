//! Filter predicate over products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Optional constraints narrowing the catalog. All present constraints must
/// hold; an empty spec lets every product through.
///
/// `min_price > max_price` is not an error, it simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive text looked up in title or description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn min_price(mut self, price: Decimal) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: Decimal) -> Self {
        self.max_price = Some(price);
        self
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.search.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Compile into a predicate, lowercasing the search text once
    pub fn predicate(&self) -> impl Fn(&Product) -> bool + '_ {
        let needle = self.search.as_ref().map(|s| s.to_lowercase());
        move |product: &Product| {
            if let Some(category) = &self.category
                && product.category != *category
            {
                return false;
            }
            if let Some(needle) = &needle
                && !product.mentions(needle)
            {
                return false;
            }
            if let Some(min) = self.min_price
                && product.price < min
            {
                return false;
            }
            if let Some(max) = self.max_price
                && product.price > max
            {
                return false;
            }
            true
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.predicate())(product)
    }

    /// Products passing the filter, cloned, in input order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        if self.is_empty() {
            return products.to_vec();
        }
        let predicate = self.predicate();
        products.iter().filter(|p| predicate(p)).cloned().collect()
    }
}
