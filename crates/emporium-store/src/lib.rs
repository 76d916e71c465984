//! Catalog and cart session stores for Emporium.
//!
//! This crate hosts the `emporium-commerce` domain types behind two
//! stores:
//!
//! - [`CatalogStore`]: the fixed product set for a session, validated
//!   at load, immutable afterwards. List, filter, lookup, and keyword
//!   search.
//! - [`CartStore`]: the session cart behind a single lock, publishing
//!   a consistent [`CartSnapshot`] to subscribers after every
//!   mutation, with opaque-blob serialize/restore.
//!
//! # Example
//!
//! ```rust
//! use emporium_store::{CartStore, CatalogStore};
//!
//! let catalog = CatalogStore::builtin()?;
//! let cart = CartStore::default();
//!
//! let diver = catalog
//!     .get_product(&"chrono-006".into())
//!     .expect("built-in product")
//!     .clone();
//! let snapshot = cart.add_item(diver)?;
//! assert_eq!(snapshot.total_items, 1);
//! # Ok::<(), emporium_store::StoreError>(())
//! ```

mod catalog;
mod data;
mod error;
mod session;

pub use catalog::CatalogStore;
pub use error::StoreError;
pub use session::{CartStore, SubscriberId};

pub use emporium_commerce::cart::CartSnapshot;
