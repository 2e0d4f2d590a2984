//! Page window over an ordered sequence

use serde::{Deserialize, Serialize};

use crate::error::{Argument, CatalogError, CatalogResult};

/// 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSpec {
    pub page: u32,
    pub size: u32,
}

impl PageSpec {
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Reject page or size of zero
    pub fn validate(&self) -> CatalogResult<()> {
        if self.page == 0 {
            return Err(CatalogError::invalid_argument(
                Argument::Page,
                "Page number must be at least 1",
            ));
        }
        if self.size == 0 {
            return Err(CatalogError::invalid_argument(
                Argument::PageSize,
                "Page size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Zero-based offset of the first element on this page
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_sub(1).saturating_mul(self.size as usize)
    }
}

/// One page of results plus what a caller needs to render pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    /// Matching items across all pages
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    /// `ceil(total / page_size)`, 0 when nothing matched
    pub total_pages: u32,
}

impl<T> PagedResult<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
        } else {
            0
        };

        Self {
            data,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Everything on one page (no pagination requested)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            page_size: u32::try_from(total).unwrap_or(u32::MAX),
            total_pages: if total == 0 { 0 } else { 1 },
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Cut the requested window out of `items`. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: PageSpec) -> CatalogResult<PagedResult<T>> {
    page.validate()?;

    let total = items.len() as u64;
    let data: Vec<T> = items
        .into_iter()
        .skip(page.offset())
        .take(page.size as usize)
        .collect();

    Ok(PagedResult::new(data, total, page.page, page.size))
}
