//! Sort comparators over products

use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::Product;

/// Field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Price,
    /// Average rating (`rating.rate`); the vote count is ignored
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

/// Field + direction. No `Default`: callers pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub const fn asc(field: SortField) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    pub const fn desc(field: SortField) -> Self {
        Self::new(field, SortOrder::Desc)
    }

    /// Stable in-place sort: equal keys keep their input order.
    ///
    /// Titles are ordered by the Unicode Collation Algorithm with the CLDR
    /// root tailoring, so "a" < "A" < "b", accents are secondary and "ß"
    /// sorts as "ss". One collator serves the whole sort.
    pub fn apply(&self, products: &mut [Product]) {
        let mut collator = Collator::default();
        products.sort_by(|a, b| {
            let ordering = match self.field {
                SortField::Title => collate_titles(&mut collator, &a.title, &b.title),
                SortField::Price => a.price.cmp(&b.price),
                SortField::Rating => a.rating.rate.total_cmp(&b.rating.rate),
            };
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }
}

/// Identical titles compare equal; distinct ones never do
fn collate_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    collator.collate(a, b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{product, sample_catalog};
    use rust_decimal::Decimal;

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut catalog = sample_catalog();
        SortSpec::desc(SortField::Price).apply(&mut catalog);
        let prices: Vec<Decimal> = catalog.iter().map(|p| p.price).collect();
        let expected: Vec<Decimal> = [999, 699, 79, 29].into_iter().map(Decimal::from).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn test_sort_by_title_ignores_case_and_accents() {
        let mut catalog = vec![
            product(1, "Zebra", 1, "a", ""),
            product(2, "éclair", 1, "a", ""),
            product(3, "apple", 1, "a", ""),
            product(4, "Banana", 1, "a", ""),
        ];
        SortSpec::asc(SortField::Title).apply(&mut catalog);
        assert_eq!(titles(&catalog), vec!["apple", "Banana", "éclair", "Zebra"]);

        SortSpec::desc(SortField::Title).apply(&mut catalog);
        assert_eq!(titles(&catalog), vec!["Zebra", "éclair", "Banana", "apple"]);
    }

    #[test]
    fn test_sort_by_rating_uses_rate_only() {
        let mut catalog = sample_catalog();
        catalog[0].rating.rate = 4.5;
        catalog[0].rating.count = 1;
        catalog[1].rating.rate = 2.0;
        catalog[1].rating.count = 9000;
        catalog[2].rating.rate = 3.1;
        catalog[3].rating.rate = 4.9;

        SortSpec::desc(SortField::Rating).apply(&mut catalog);
        let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut catalog = vec![
            product(1, "A", 10, "x", ""),
            product(2, "B", 5, "x", ""),
            product(3, "C", 10, "x", ""),
            product(4, "D", 5, "x", ""),
            product(5, "E", 10, "x", ""),
        ];
        SortSpec::asc(SortField::Price).apply(&mut catalog);
        let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);

        // Descending reverses keys, not the relative order of ties
        SortSpec::desc(SortField::Price).apply(&mut catalog);
        let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_equal_titles_are_stable() {
        let mut catalog = vec![
            product(1, "Mug", 3, "x", ""),
            product(2, "Cap", 3, "x", ""),
            product(3, "Mug", 3, "x", ""),
        ];
        SortSpec::asc(SortField::Title).apply(&mut catalog);
        let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_case_only_difference_puts_lowercase_first() {
        let mut catalog = vec![
            product(1, "b", 1, "x", ""),
            product(2, "a", 1, "x", ""),
            product(3, "B", 1, "x", ""),
            product(4, "A", 1, "x", ""),
        ];
        SortSpec::asc(SortField::Title).apply(&mut catalog);
        assert_eq!(titles(&catalog), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn test_sharp_s_sorts_as_double_s() {
        let mut catalog = vec![
            product(1, "Strasza", 1, "x", ""),
            product(2, "Straße", 1, "x", ""),
            product(3, "Strasse", 1, "x", ""),
        ];
        SortSpec::asc(SortField::Title).apply(&mut catalog);
        assert_eq!(titles(&catalog), vec!["Strasse", "Straße", "Strasza"]);
    }

    #[test]
    fn test_order_accepts_long_names() {
        let order: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(order, SortOrder::Desc);
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }
}
