//! Catalog query pipeline
//!
//! Turns the full product list into one page: filter, then sort, then
//! paginate, always in that order. Pure and synchronous; the input slice is
//! never mutated, so concurrent callers need no coordination.
//!
//! ```
//! use rust_decimal::Decimal;
//! use shared::query::{query, FilterSpec, PageSpec, SortField, SortSpec};
//!
//! # let catalog: Vec<shared::models::Product> = Vec::new();
//! let filter = FilterSpec::new().category("electronics").max_price(Decimal::from(800));
//! let page = query(
//!     &catalog,
//!     Some(&filter),
//!     Some(&SortSpec::desc(SortField::Price)),
//!     Some(&PageSpec::new(1, 12)),
//! )?;
//! assert_eq!(page.total_pages, 0);
//! # Ok::<(), shared::error::CatalogError>(())
//! ```

pub mod filter;
pub mod pagination;
pub mod params;
pub mod sort;

pub use filter::FilterSpec;
pub use pagination::{PageSpec, PagedResult, paginate};
pub use params::{DEFAULT_PAGE_SIZE, DEFAULT_SORT, ListingParams};
pub use sort::{SortField, SortOrder, SortSpec};

use crate::error::CatalogResult;
use crate::models::Product;

/// Run the pipeline over `products`.
///
/// - no filter: every product passes
/// - no sort: input order is kept
/// - no page: the whole result is returned as a single page
///
/// Fails only with `InvalidArgument` for a page number or size of zero,
/// checked before any work is done.
pub fn query(
    products: &[Product],
    filter: Option<&FilterSpec>,
    sort: Option<&SortSpec>,
    page: Option<&PageSpec>,
) -> CatalogResult<PagedResult<Product>> {
    if let Some(page) = page {
        page.validate()?;
    }

    let mut matching = match filter {
        Some(filter) => filter.apply(products),
        None => products.to_vec(),
    };

    if let Some(sort) = sort {
        sort.apply(&mut matching);
    }

    match page {
        Some(page) => paginate(matching, *page),
        None => Ok(PagedResult::single_page(matching)),
    }
}

/// [`query`] driven by flat listing parameters with listing defaults applied
pub fn query_listing(
    products: &[Product],
    params: ListingParams,
) -> CatalogResult<PagedResult<Product>> {
    let (filter, sort, page) = params.into_specs();
    query(products, Some(&filter), Some(&sort), Some(&page))
}


#[cfg(test)]
mod tests {
    use super::fixtures::{product, sample_catalog};
    use super::*;
    use crate::error::{Argument, CatalogError};
    use rust_decimal::Decimal;

    fn titles(page: &PagedResult<Product>) -> Vec<&str> {
        page.data.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_filter_by_category_keeps_input_order() {
        let catalog = sample_catalog();
        let filter = FilterSpec::new().category("electronics");
        let page = query(&catalog, Some(&filter), None, None).unwrap();
        assert_eq!(titles(&page), vec!["Laptop", "Phone"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let catalog = sample_catalog();
        let sort = SortSpec::desc(SortField::Price);
        let page = query(&catalog, None, Some(&sort), None).unwrap();
        let prices: Vec<Decimal> = page.data.iter().map(|p| p.price).collect();
        let expected: Vec<Decimal> = [999, 699, 79, 29].into_iter().map(Decimal::from).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn test_price_range_is_inclusive_across_categories() {
        let catalog = sample_catalog();
        let filter = FilterSpec::new()
            .min_price(Decimal::from(50))
            .max_price(Decimal::from(800));
        let page = query(&catalog, Some(&filter), None, None).unwrap();
        assert_eq!(titles(&page), vec!["Phone", "Jeans"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_second_page_without_filter_or_sort() {
        let catalog = sample_catalog();
        let page = query(&catalog, None, None, Some(&PageSpec::new(2, 2))).unwrap();
        assert_eq!(titles(&page), vec!["T-Shirt", "Jeans"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_after_last_is_empty_with_same_total_pages() {
        let catalog = sample_catalog();
        let filter = FilterSpec::new().category("clothing");
        let first = query(&catalog, Some(&filter), None, Some(&PageSpec::new(1, 1))).unwrap();
        assert_eq!(first.total_pages, 2);

        let beyond = PageSpec::new(first.total_pages + 1, 1);
        let page = query(&catalog, Some(&filter), None, Some(&beyond)).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, first.total_pages);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_total_pages_counts_filtered_items_only() {
        let catalog: Vec<Product> = (1..=25)
            .map(|i| {
                let category = if i % 5 == 0 { "rare" } else { "common" };
                product(i, &format!("Item {i}"), i as i64, category, "")
            })
            .collect();
        let filter = FilterSpec::new().category("common");
        let page = query(&catalog, Some(&filter), None, Some(&PageSpec::new(1, 6))).unwrap();
        assert_eq!(page.total, 20);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.data.len(), 6);
    }

    #[test]
    fn test_filter_then_sort_then_paginate() {
        let catalog = sample_catalog();
        let filter = FilterSpec::new().max_price(Decimal::from(700));
        let sort = SortSpec::asc(SortField::Price);
        let page = query(&catalog, Some(&filter), Some(&sort), Some(&PageSpec::new(1, 2))).unwrap();
        assert_eq!(titles(&page), vec!["T-Shirt", "Jeans"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_every_result_satisfies_the_filter() {
        let catalog: Vec<Product> = (1..=40)
            .map(|i| {
                let category = ["a", "b", "c"][(i % 3) as usize];
                let title = if i % 4 == 0 { "Gold Ring" } else { "Silver Chain" };
                product(i, title, (i * 7 % 50) as i64, category, "jewel")
            })
            .collect();
        let filter = FilterSpec::new()
            .category("b")
            .search("gold")
            .min_price(Decimal::from(10))
            .max_price(Decimal::from(40));
        let page = query(&catalog, Some(&filter), None, None).unwrap();

        assert!(!page.data.is_empty());
        for p in &page.data {
            assert!(catalog.contains(p));
            assert_eq!(p.category, "b");
            assert!(p.title.to_lowercase().contains("gold"));
            assert!(p.price >= Decimal::from(10) && p.price <= Decimal::from(40));
        }
        let expected = catalog.iter().filter(|p| filter.matches(p)).count() as u64;
        assert_eq!(page.total, expected);
    }

    #[test]
    fn test_query_is_idempotent_and_leaves_input_untouched() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let sort = SortSpec::asc(SortField::Title);
        let page = PageSpec::new(1, 3);

        let first = query(&catalog, None, Some(&sort), Some(&page)).unwrap();
        let second = query(&catalog, None, Some(&sort), Some(&page)).unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_zero_page_size_is_invalid_argument() {
        let catalog = sample_catalog();
        let err = query(&catalog, None, None, Some(&PageSpec::new(1, 0))).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidArgument {
                argument: Argument::PageSize,
                ..
            }
        ));
    }

    #[test]
    fn test_query_listing_defaults_to_title_ascending() {
        let catalog = sample_catalog();
        let page = query_listing(&catalog, ListingParams::default()).unwrap();
        assert_eq!(titles(&page), vec!["Jeans", "Laptop", "Phone", "T-Shirt"]);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
    }
}
