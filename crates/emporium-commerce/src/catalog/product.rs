//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable watch in the catalog.
///
/// Products are immutable once the catalog is loaded. `stock` is
/// informational for display; the cart does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Maker brand.
    pub brand: String,
    /// Unit price.
    pub price: Money,
    /// Primary image reference.
    pub image_url: String,
    /// Additional gallery images, in thumbnail display order.
    #[serde(default)]
    pub gallery_images: Vec<String>,
    /// Full description.
    pub description: String,
    /// One-line description for listings.
    pub short_description: String,
    /// Short feature bullets, in display order.
    pub features: Vec<String>,
    /// Collection this product belongs to.
    pub category: Category,
    /// Available inventory (display-only).
    pub stock: i64,
    /// Display-only stock code.
    pub sku: String,
}

impl Product {
    /// Check if any inventory remains.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// All image references, primary first then gallery order.
    pub fn all_images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image_url.as_str())
            .chain(self.gallery_images.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample() -> Product {
        Product {
            id: ProductId::new("chrono-003"),
            name: "Elegance Classic Date".to_string(),
            brand: "ChronoCraft".to_string(),
            price: Money::new(195_000, Currency::USD),
            image_url: "https://img.example/elegance/600.jpg".to_string(),
            gallery_images: vec![
                "https://img.example/elegance/g1.jpg".to_string(),
                "https://img.example/elegance/g2.jpg".to_string(),
            ],
            description: "Timeless automatic with a sunburst silver dial.".to_string(),
            short_description: "Timeless design with a refined silver dial.".to_string(),
            features: vec!["Automatic Movement".to_string(), "Date Complication".to_string()],
            category: Category::Classic,
            stock: 40,
            sku: "CC-ECD-003RG".to_string(),
        }
    }

    #[test]
    fn test_in_stock() {
        let mut product = sample();
        assert!(product.in_stock());
        product.stock = 0;
        assert!(!product.in_stock());
    }

    #[test]
    fn test_all_images_order() {
        let product = sample();
        let images: Vec<&str> = product.all_images().collect();
        assert_eq!(images[0], "https://img.example/elegance/600.jpg");
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_gallery_defaults_empty() {
        let json = r#"{
            "id": "chrono-006",
            "name": "Apex Diver Pro 300M",
            "brand": "ChronoCraft",
            "price": { "amount_cents": 290000, "currency": "USD" },
            "imageUrl": "https://img.example/apex/600.jpg",
            "description": "Robust dive watch.",
            "shortDescription": "Professional-grade dive watch.",
            "features": ["300m Water Resistance"],
            "category": "Sport & Adventure",
            "stock": 20,
            "sku": "CC-ADP-006SS"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.gallery_images.is_empty());
        assert_eq!(product.category, Category::Sports);
    }
}
