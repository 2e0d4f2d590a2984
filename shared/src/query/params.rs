//! Flat listing parameters, as they arrive in a URL query string

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilterSpec, PageSpec, SortField, SortOrder, SortSpec};

/// Page size of the listing grid when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Sort applied when the caller does not ask for one
pub const DEFAULT_SORT: SortSpec = SortSpec::asc(SortField::Title);

/// `?category=&search=&min_price=&max_price=&sort_by=&order=&page=&page_size=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListingParams {
    /// Split into the three query specs, filling in listing defaults.
    ///
    /// Blank `category` / `search` values (an empty form field) count as
    /// absent. Page values are passed through untouched so that zero is
    /// rejected by the pipeline rather than silently fixed here.
    pub fn into_specs(self) -> (FilterSpec, SortSpec, PageSpec) {
        let filter = FilterSpec {
            category: non_blank(self.category),
            search: non_blank(self.search),
            min_price: self.min_price,
            max_price: self.max_price,
        };
        let sort = SortSpec::new(
            self.sort_by.unwrap_or(DEFAULT_SORT.field),
            self.order.unwrap_or(DEFAULT_SORT.order),
        );
        let page = PageSpec::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        (filter, sort, page)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
