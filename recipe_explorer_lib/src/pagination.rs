//! Navigation helpers derived from a page of results.

use recipe_api::types::PagedRecipes;
use serde::Serialize;

/// Where a page sits in the full result set, for rendering "previous / next" controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub total_pages: i64,
    pub total: i64,
    pub previous: i64,
    pub next: i64,
}

impl PageInfo {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let page_size = page_size.max(1);
        let total = total.max(0);
        // An empty result still renders as a single page.
        let total_pages = (total / page_size + i64::from(total % page_size != 0)).max(1);
        let page = page.max(1);
        Self {
            page,
            total_pages,
            total,
            previous: page.saturating_sub(1).max(1),
            next: page.saturating_add(1).min(total_pages),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether navigation controls are worth showing at all.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }
}

impl From<&PagedRecipes> for PageInfo {
    fn from(page: &PagedRecipes) -> Self {
        Self::new(page.page, page.page_size, page.total)
    }
}
