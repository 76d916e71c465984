//! Store error types.

use emporium_commerce::ProductId;
use thiserror::Error;

/// Errors that can occur in the store layer.
///
/// The domain layer itself never fails: catalog lookups return
/// `Option` and cart mutations are total. Everything here is either a
/// catalog-load problem or a host-level fault.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two catalog products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A catalog product carries a negative price.
    #[error("Negative price for product: {0}")]
    InvalidPrice(ProductId),

    /// A catalog product carries negative stock.
    #[error("Negative stock for product: {0}")]
    InvalidStock(ProductId),

    /// A lock was poisoned by a panicking writer.
    #[error("Cart lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// Snapshot encode/decode failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
