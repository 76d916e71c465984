//! Search query builder.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order (default).
    #[default]
    Relevance,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }
}

/// A keyword search over the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Keyword matched against name, brand, descriptions and features.
    /// Empty or missing matches everything.
    pub keyword: Option<String>,
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl SearchQuery {
    /// Create a match-all query with default paging.
    pub fn new() -> Self {
        Self {
            keyword: None,
            category: None,
            sort: SortOption::Relevance,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the keyword. An empty string is treated as no keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if !keyword.is_empty() {
            self.keyword = Some(keyword);
        }
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Page is clamped to 1, per_page to at least 1.
    pub fn with_page(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.max(1);
        self
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keyword_is_none() {
        let query = SearchQuery::new().with_keyword("");
        assert!(query.keyword.is_none());

        let query = SearchQuery::new().with_keyword("diver");
        assert_eq!(query.keyword.as_deref(), Some("diver"));
    }

    #[test]
    fn test_page_clamping() {
        let query = SearchQuery::new().with_page(0, -3);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);
    }
}
