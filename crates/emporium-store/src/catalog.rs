//! The read-only catalog store.

use crate::error::StoreError;
use crate::data;
use emporium_commerce::catalog::{Category, Product};
use emporium_commerce::search::{Pagination, SearchQuery, SearchResults, SortOption};
use emporium_commerce::ProductId;
use std::collections::HashMap;
use tracing::debug;

/// The fixed set of sellable products for a session.
///
/// Immutable after construction: the store never hands out mutable
/// access, so an `Arc<CatalogStore>` can be read from any number of
/// threads without synchronization.
pub struct CatalogStore {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a store from a product list, validating catalog
    /// invariants: unique ids, non-negative price and stock.
    ///
    /// Load order is preserved and becomes the listing order.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if product.price.is_negative() {
                return Err(StoreError::InvalidPrice(product.id.clone()));
            }
            if product.stock < 0 {
                return Err(StoreError::InvalidStock(product.id.clone()));
            }
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(StoreError::DuplicateProduct(product.id.clone()));
            }
        }
        debug!(products = products.len(), "catalog loaded");
        Ok(Self { products, by_id })
    }

    /// Build the store from the built-in watch dataset.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::new(data::builtin_products()?)
    }

    /// All products, or only those in `category`, in load order.
    ///
    /// A category with no products yields an empty list, never an
    /// error.
    pub fn list_products(&self, category: Option<Category>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    /// Exact-match lookup by id. Absent is `None`, never an error.
    pub fn get_product(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// The fixed category values, in declaration order.
    pub fn list_categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Keyword search with category filter, sort, and pagination.
    ///
    /// The keyword is matched case-insensitively against name, brand,
    /// both descriptions, and feature bullets. `Relevance` keeps
    /// catalog order.
    pub fn search(&self, query: &SearchQuery) -> SearchResults {
        let keyword = query
            .keyword
            .as_deref()
            .map(str::to_lowercase)
            .filter(|k| !k.is_empty());

        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.category.map_or(true, |c| p.category == c))
            .filter(|p| keyword.as_deref().map_or(true, |k| matches_keyword(p, k)))
            .collect();

        sort_products(&mut matches, query.sort);

        let total = matches.len() as i64;
        let pagination = Pagination::new(query.page, query.per_page, total);
        let offset = ((pagination.page - 1) * pagination.per_page) as usize;
        let products: Vec<Product> = matches
            .into_iter()
            .skip(offset)
            .take(pagination.per_page as usize)
            .cloned()
            .collect();

        debug!(
            keyword = keyword.as_deref().unwrap_or(""),
            total, "catalog search"
        );

        SearchResults {
            products,
            pagination,
        }
    }
}

fn matches_keyword(product: &Product, keyword: &str) -> bool {
    product.name.to_lowercase().contains(keyword)
        || product.brand.to_lowercase().contains(keyword)
        || product.description.to_lowercase().contains(keyword)
        || product.short_description.to_lowercase().contains(keyword)
        || product
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(keyword))
}

fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::Relevance => {} // catalog order
        SortOption::PriceAsc => {
            products.sort_by_key(|p| p.price.amount_cents);
        }
        SortOption::PriceDesc => {
            products.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
        }
        SortOption::NameAsc => {
            products.sort_by(|a, b| a.name.cmp(&b.name));
        }
        SortOption::NameDesc => {
            products.sort_by(|a, b| b.name.cmp(&a.name));
        }
    }
}
