//! Newtype ID for type-safe product identifiers.
//!
//! Wrapping the raw string prevents a product id from being confused
//! with a SKU or any other display string at an API boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier, stable for the life of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("chrono-001");
        assert_eq!(id.as_str(), "chrono-001");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "chrono-002".into();
        assert_eq!(id.as_str(), "chrono-002");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("chrono-003");
        assert_eq!(format!("{}", id), "chrono-003");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("same"), ProductId::new("same"));
        assert_ne!(ProductId::new("same"), ProductId::new("other"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = ProductId::new("chrono-004");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"chrono-004\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
