//! Built-in catalog dataset.
//!
//! The product set ships with the binary; the catalog loads once per
//! session from this static source and never changes afterwards.

use crate::error::StoreError;
use emporium_commerce::catalog::Product;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");

/// Deserialize the embedded watch catalog, in declaration order.
pub fn builtin_products() -> Result<Vec<Product>, StoreError> {
    Ok(serde_json::from_str(PRODUCTS_JSON)?)
}
