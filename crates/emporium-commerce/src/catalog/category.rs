//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of collections the storefront sells.
///
/// Declaration order is the order categories are listed in navigation,
/// and the serialized form is the customer-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Dress watches with traditional complications.
    #[serde(rename = "Classic Elegance")]
    Classic,
    /// Dive and GMT tool watches.
    #[serde(rename = "Sport & Adventure")]
    Sports,
    /// Haute horlogerie pieces.
    #[serde(rename = "Luxury Collection")]
    Luxury,
    /// Pared-down contemporary designs.
    #[serde(rename = "Modern Minimalist")]
    Minimalist,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Classic,
        Category::Sports,
        Category::Luxury,
        Category::Minimalist,
    ];

    /// The customer-facing label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classic => "Classic Elegance",
            Category::Sports => "Sport & Adventure",
            Category::Luxury => "Luxury Collection",
            Category::Minimalist => "Modern Minimalist",
        }
    }

    /// Parse a label back to a category.
    pub fn from_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
