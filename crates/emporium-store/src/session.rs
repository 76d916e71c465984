//! The mutable cart store for one shopping session.

use crate::error::StoreError;
use emporium_commerce::cart::{Cart, CartSnapshot};
use emporium_commerce::catalog::Product;
use emporium_commerce::money::Currency;
use emporium_commerce::ProductId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::debug;

/// Identifies a registered cart listener, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn Fn(&CartSnapshot) + Send + Sync>;

/// Owns the session cart and publishes a snapshot after every
/// mutation.
///
/// All access goes through one lock, so mutations are serialized and a
/// reader never observes a partially-updated line list. Consumers that
/// need to react to changes register a listener with
/// [`CartStore::subscribe`] instead of polling; the store is the only
/// holder of the cart, never a shared global.
pub struct CartStore {
    cart: RwLock<Cart>,
    subscribers: RwLock<Vec<(SubscriberId, Listener)>>,
    next_subscriber: AtomicU64,
}

impl CartStore {
    /// Create an empty cart store quoting in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: RwLock::new(Cart::new(currency)),
            subscribers: RwLock::new(Vec::new()),
            next_subscriber: AtomicU64::new(0),
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product id, or appends a
    /// new line with quantity 1. Stock is not enforced and the product
    /// is not checked against any catalog.
    pub fn add_item(&self, product: Product) -> Result<CartSnapshot, StoreError> {
        let snapshot = {
            let mut cart = self
                .cart
                .write()
                .map_err(|_| StoreError::LockPoisoned("add_item"))?;
            debug!(product = %product.id, "cart add");
            cart.add_item(product);
            cart.snapshot()
        };
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Set a line's quantity to an absolute value; `<= 0` removes the
    /// line, an unknown id is a no-op.
    pub fn update_quantity(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<CartSnapshot, StoreError> {
        let snapshot = {
            let mut cart = self
                .cart
                .write()
                .map_err(|_| StoreError::LockPoisoned("update_quantity"))?;
            let changed = cart.update_quantity(id, quantity);
            debug!(product = %id, quantity, changed, "cart update");
            cart.snapshot()
        };
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Remove the line for `id`; no-op when absent.
    pub fn remove_item(&self, id: &ProductId) -> Result<CartSnapshot, StoreError> {
        let snapshot = {
            let mut cart = self
                .cart
                .write()
                .map_err(|_| StoreError::LockPoisoned("remove_item"))?;
            let removed = cart.remove_item(id);
            debug!(product = %id, removed, "cart remove");
            cart.snapshot()
        };
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<CartSnapshot, StoreError> {
        let snapshot = {
            let mut cart = self
                .cart
                .write()
                .map_err(|_| StoreError::LockPoisoned("clear"))?;
            cart.clear();
            debug!("cart cleared");
            cart.snapshot()
        };
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Consistent read of the current state.
    pub fn snapshot(&self) -> Result<CartSnapshot, StoreError> {
        let cart = self
            .cart
            .read()
            .map_err(|_| StoreError::LockPoisoned("snapshot"))?;
        Ok(cart.snapshot())
    }

    /// Register a listener called with the snapshot after every
    /// mutation. Listeners run on the mutating thread, outside the
    /// cart lock.
    pub fn subscribe(
        &self,
        listener: impl Fn(&CartSnapshot) + Send + Sync + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::SeqCst));

        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.push((id, Box::new(listener)));
        }
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        match self.subscribers.write() {
            Ok(mut subscribers) => {
                let len_before = subscribers.len();
                subscribers.retain(|(sub_id, _)| *sub_id != id);
                subscribers.len() < len_before
            }
            Err(_) => false,
        }
    }

    /// Serialize the cart to an opaque blob.
    ///
    /// The only contract on the format is that [`CartStore::restore`]
    /// accepts it losslessly.
    pub fn serialize(&self) -> Result<String, StoreError> {
        let cart = self
            .cart
            .read()
            .map_err(|_| StoreError::LockPoisoned("serialize"))?;
        Ok(serde_json::to_string(&*cart)?)
    }

    /// Replace the cart with a previously serialized blob and notify
    /// subscribers. Round-trips with identical lines, order and
    /// totals.
    pub fn restore(&self, blob: &str) -> Result<CartSnapshot, StoreError> {
        let restored: Cart = serde_json::from_str(blob)?;
        let snapshot = {
            let mut cart = self
                .cart
                .write()
                .map_err(|_| StoreError::LockPoisoned("restore"))?;
            *cart = restored;
            debug!(lines = cart.unique_lines(), "cart restored");
            cart.snapshot()
        };
        self.publish(&snapshot);
        Ok(snapshot)
    }

    fn publish(&self, snapshot: &CartSnapshot) {
        if let Ok(subscribers) = self.subscribers.read() {
            for (_, listener) in subscribers.iter() {
                listener(snapshot);
            }
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emporium_commerce::catalog::Category;
    use emporium_commerce::money::Money;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn watch(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Watch {id}"),
            brand: "ChronoCraft".to_string(),
            price: Money::new(cents, Currency::USD),
            image_url: String::new(),
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
    fn test_mutations_return_consistent_snapshot() {
        let store = CartStore::default();
        let snapshot = store.add_item(watch("w1", 100_00)).unwrap();
        assert_eq!(snapshot.total_items, 1);
        assert_eq!(snapshot.total_price, Money::new(100_00, Currency::USD));

        let snapshot = store.update_quantity(&ProductId::new("w1"), 3).unwrap();
        assert_eq!(snapshot.total_items, 3);
        assert_eq!(snapshot.total_price, Money::new(300_00, Currency::USD));
    }

    #[test]
    fn test_subscriber_sees_every_mutation() {
        let store = CartStore::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_listener = Arc::clone(&seen);

        store.subscribe(move |snapshot| {
            // Snapshot totals always match the line-sum formula.
            let items: i64 = snapshot.lines.iter().map(|l| l.quantity).sum();
            assert_eq!(snapshot.total_items, items);
            seen_in_listener.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(watch("w1", 100_00)).unwrap();
        store.update_quantity(&ProductId::new("w1"), 5).unwrap();
        store.remove_item(&ProductId::new("w1")).unwrap();
        store.clear().unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = CartStore::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_listener = Arc::clone(&seen);

        let id = store.subscribe(move |_| {
            seen_in_listener.fetch_add(1, Ordering::SeqCst);
        });
        store.add_item(watch("w1", 100_00)).unwrap();

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(watch("w1", 100_00)).unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_serialize_restore_round_trip() {
        let store = CartStore::default();
        store.add_item(watch("w1", 100_00)).unwrap();
        store.add_item(watch("w2", 50_00)).unwrap();
        store.update_quantity(&ProductId::new("w1"), 3).unwrap();
        let before = store.snapshot().unwrap();

        let blob = store.serialize().unwrap();

        let other = CartStore::default();
        let after = other.restore(&blob).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let store = CartStore::default();
        assert!(matches!(
            store.restore("not json"),
            Err(StoreError::Serialization(_))
        ));
        // Failed restore leaves state untouched.
        assert!(store.snapshot().unwrap().is_empty());
    }
}
