//! Cart and cart line types.

use crate::cart::{CartSnapshot, CartTotals, LineTotal};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product plus a positive quantity.
///
/// The cart holds exactly one line per distinct product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product being purchased.
    pub product: Product,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Extended price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }

    /// Per-line totals row for a snapshot.
    pub fn totals(&self) -> LineTotal {
        LineTotal {
            product_id: self.product.id.clone(),
            quantity: self.quantity,
            unit_price: self.product.price,
            line_total: self.line_total(),
        }
    }
}

/// The shopping cart: an ordered line sequence and nothing else.
///
/// Totals are a pure function of the lines. They are computed on
/// demand rather than cached, so they cannot drift from the line list.
///
/// Every mutation is a total function: an unknown id is a no-op, a
/// non-positive quantity deletes. A double-click or a stale reference
/// from the presentation layer can never fail the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in insertion order (insertion order = display order).
    lines: Vec<CartLine>,
    /// Currency totals are quoted in.
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// If a line for `product.id` already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is
    /// appended at the end. The product is not checked against any
    /// catalog and stock is not enforced.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity <= 0 behaves as [`Cart::remove_item`]. An unknown id
    /// is a no-op. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        match self.lines.iter_mut().find(|l| &l.product.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line for `id`, preserving the order of the rest.
    ///
    /// No-op when absent; calling twice is the same as calling once.
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        self.lines.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    pub fn get_line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    /// The currency totals are quoted in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_lines(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` over all lines, in integer cents.
    pub fn total_price(&self) -> Money {
        let line_totals: Vec<Money> = self.lines.iter().map(CartLine::line_total).collect();
        Money::saturating_sum(line_totals.iter(), self.currency)
    }

    /// Both derived totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            items: self.total_items(),
            price: self.total_price(),
        }
    }

    /// Full read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn watch(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Watch {id}"),
            brand: "ChronoCraft".to_string(),
            price: Money::new(cents, Currency::USD),
            image_url: format!("https://img.example/{id}.jpg"),
            gallery_images: Vec::new(),
            description: String::new(),
            short_description: String::new(),
            features: Vec::new(),
            category: Category::Classic,
            stock: 10,
            sku: format!("SKU-{id}"),
        }
    }

    #[test]
    fn test_add_accumulates_one_line() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));
        cart.add_item(watch("w1", 100_00));

        assert_eq!(cart.unique_lines(), 1);
        assert_eq!(cart.get_line(&ProductId::new("w1")).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));
        cart.add_item(watch("w1", 100_00));

        assert!(cart.update_quantity(&ProductId::new("w1"), 3));
        assert_eq!(cart.total_items(), 3); // set, not incremented
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));

        assert!(!cart.update_quantity(&ProductId::new("ghost"), 5));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_delete() {
        for quantity in [0, -5] {
            let mut cart = Cart::default();
            cart.add_item(watch("w1", 100_00));
            assert!(cart.update_quantity(&ProductId::new("w1"), quantity));
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));

        assert!(cart.remove_item(&ProductId::new("w1")));
        let after_once = cart.clone();
        assert!(!cart.remove_item(&ProductId::new("w1")));
        assert_eq!(cart, after_once);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = Cart::default();
        cart.add_item(watch("a", 100_00));
        cart.add_item(watch("b", 200_00));
        cart.add_item(watch("c", 300_00));

        cart.remove_item(&ProductId::new("b"));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_totals_follow_lines() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));
        cart.add_item(watch("w2", 50_00));
        cart.update_quantity(&ProductId::new("w1"), 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::new(350_00, Currency::USD));

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.lines[0].quantity, 3);
        assert_eq!(snapshot.lines[1].quantity, 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 100_00));
        cart.add_item(watch("w2", 50_00));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::default();
        cart.add_item(watch("w1", 2900_00));
        cart.update_quantity(&ProductId::new("w1"), 2);

        let line = cart.get_line(&ProductId::new("w1")).unwrap();
        assert_eq!(line.line_total(), Money::new(5800_00, Currency::USD));
    }
}
