//! Synthetic sales analytics
//!
//! The remote catalog has no sales data, so the detail view shows a
//! fabricated twelve-month series. It is a pure function of the product id
//! (and price, for revenue): the same product always gets the same chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const BASE_UNITS: u64 = 20;
const UNIT_SPREAD: u64 = 80;
const HOLIDAY_BUMP: u32 = 15;

/// One month of the series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    /// Units sold
    pub sales: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Month with the most units; the earliest wins a tie
    pub best_month: Option<String>,
}

/// Units sold by product `id` in month `month_index` (0 = January)
pub fn units_for(id: u64, month_index: usize) -> u32 {
    let step = id
        .wrapping_mul(37)
        .wrapping_add(month_index as u64 * 53);
    let mut units = (BASE_UNITS + step % UNIT_SPREAD) as u32;
    // Nov, Dec
    if month_index >= 10 {
        units += HOLIDAY_BUMP;
    }
    units
}

pub fn sales_series(product: &Product) -> Vec<MonthlySales> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let sales = units_for(product.id, index);
            MonthlySales {
                month: (*month).to_string(),
                sales,
                revenue: (product.price * Decimal::from(sales)).round_dp(2),
            }
        })
        .collect()
}

pub fn summarize(series: &[MonthlySales]) -> SalesSummary {
    let total_sales = series.iter().map(|m| m.sales).sum();
    let total_revenue = series.iter().map(|m| m.revenue).sum();
    let best_month = series
        .iter()
        .fold(None::<&MonthlySales>, |best, m| match best {
            Some(b) if b.sales >= m.sales => Some(b),
            _ => Some(m),
        })
        .map(|m| m.month.clone());

    SalesSummary {
        total_sales,
        total_revenue,
        best_month,
    }
}
