//! Search results and pagination.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Pagination metadata for a result page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total matching items across all pages.
    pub total_items: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl Pagination {
    /// Compute pagination for a total count.
    pub fn new(page: i64, per_page: i64, total_items: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + per_page - 1) / per_page
        };
        Self {
            page: page.max(1),
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// One page of matching products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// Matching products for the requested page, in sorted order.
    pub products: Vec<Product>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl SearchResults {
    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.pagination.total_items == 0
    }
}
