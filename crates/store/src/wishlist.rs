//! Wishlist store.
//!
//! The wishlist is a set of saved products keyed by id: presence is
//! binary, there is no quantity. Insertion order is kept so the saved
//! list renders stably.

use std::sync::Arc;

use verdant_core::{Product, ProductId};

use crate::Listener;
use crate::persist::{self, Persister};

/// Client-side wishlist backed by a durable snapshot.
///
/// Same persistence contract as the cart: every applied mutation writes
/// the full set under [`Self::STORAGE_KEY`] and notifies subscribers.
pub struct WishlistStore {
    products: Vec<Product>,
    persister: Arc<dyn Persister>,
    subscribers: Vec<Listener>,
}

impl WishlistStore {
    /// Key the wishlist snapshot is persisted under.
    pub const STORAGE_KEY: &'static str = "wishlist-store";

    /// Create a wishlist, rehydrating any persisted snapshot.
    #[must_use]
    pub fn new(persister: Arc<dyn Persister>) -> Self {
        let products = persist::load_or_default(persister.as_ref(), Self::STORAGE_KEY);
        Self {
            products,
            persister,
            subscribers: Vec::new(),
        }
    }

    /// Saved products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a product with `id` is saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|product| product.id == *id)
    }

    /// Save `product` if no entry with the same id exists.
    ///
    /// Adding an already-saved product is a no-op, not an error.
    pub fn add(&mut self, product: Product) {
        if self.contains(&product.id) {
            return;
        }
        self.products.push(product);
        self.commit();
    }

    /// Remove the saved product with `id`. No-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.products.len();
        self.products.retain(|product| product.id != *id);
        if self.products.len() != before {
            self.commit();
        }
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        if !self.products.is_empty() {
            self.products.clear();
            self.commit();
        }
    }

    /// Register a listener invoked after each applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    fn commit(&self) {
        persist::persist_state(self.persister.as_ref(), Self::STORAGE_KEY, &self.products);
        for listener in &self.subscribers {
            listener();
        }
    }
}
