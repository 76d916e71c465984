//! Derived cart totals.

use crate::cart::CartLine;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The two derived totals, always recomputed from the line list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of quantities over all lines.
    pub items: i64,
    /// Sum of `price * quantity` over all lines, in integer cents.
    pub price: Money,
}

/// Totals row for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Product the line is for.
    pub product_id: ProductId,
    /// Quantity on the line.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Extended price (unit price times quantity).
    pub line_total: Money,
}

/// Read-only view of the cart handed to consumers after every mutation.
///
/// The totals here were computed from `lines` at the moment the
/// snapshot was taken; the snapshot is self-consistent by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Lines in display order.
    pub lines: Vec<CartLine>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of extended line prices.
    pub total_price: Money,
}

impl CartSnapshot {
    /// Check if the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Per-line totals rows, in display order.
    pub fn line_totals(&self) -> Vec<LineTotal> {
        self.lines.iter().map(CartLine::totals).collect()
    }
}
