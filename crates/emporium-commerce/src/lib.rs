//! Storefront domain types and cart logic for Emporium.
//!
//! This crate provides the state core of a luxury-watch storefront:
//!
//! - **Catalog**: products, fixed category set
//! - **Cart**: line sequence, permissive mutations, derived totals
//! - **Search**: keyword query and result types
//! - **Money**: cents-based monetary values
//!
//! Everything here is pure data and logic; no I/O, no locking. The
//! `emporium-store` crate hosts these types behind session stores.
//!
//! # Example
//!
//! ```rust
//! use emporium_commerce::prelude::*;
//!
//! let watch = Product {
//!     id: ProductId::new("chrono-004"),
//!     name: "Urban Minimalist Auto".to_string(),
//!     brand: "ChronoCraft".to_string(),
//!     price: Money::from_decimal(1500.00, Currency::USD),
//!     image_url: "https://img.example/urban/600.jpg".to_string(),
//!     gallery_images: Vec::new(),
//!     description: "Sleek automatic for city life.".to_string(),
//!     short_description: "Sleek and modern automatic.".to_string(),
//!     features: vec!["Titanium Case".to_string()],
//!     category: Category::Minimalist,
//!     stock: 30,
//!     sku: "CC-UMA-004TI".to_string(),
//! };
//!
//! let mut cart = Cart::default();
//! cart.add_item(watch.clone());
//! cart.add_item(watch);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().display(), "$3000.00");
//! ```

pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSnapshot, CartTotals, LineTotal};

    // Search
    pub use crate::search::{Pagination, SearchQuery, SearchResults, SortOption};
}
