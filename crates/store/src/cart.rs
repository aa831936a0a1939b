//! Shopping cart store.
//!
//! The cart is an ordered sequence of [`LineItem`]s keyed by product
//! identity. Insertion order is preserved for display stability. At most
//! one line exists per product id, and a line's quantity is always at
//! least 1: decrementing a quantity-1 line removes it, mirroring a
//! "remove" gesture in the UI.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use verdant_core::{Product, ProductId};

use crate::Listener;
use crate::persist::{self, Persister};

/// One product entry in the cart with an associated quantity.
///
/// The product fields are a snapshot taken when the line was first added;
/// later catalog changes (price, title) do not retroactively update it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl LineItem {
    /// The product snapshot this line was created from.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// How many units of the product are in the cart. Always ≥ 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Client-side shopping cart backed by a durable snapshot.
///
/// All mutations go through this store; the UI layer only reads
/// [`items`](Self::items) and the query methods. Every applied mutation
/// persists the full cart under [`Self::STORAGE_KEY`] and then notifies
/// subscribers. Operations that change nothing (removing an absent id,
/// clearing an empty cart) skip both.
pub struct CartStore {
    items: Vec<LineItem>,
    persister: Arc<dyn Persister>,
    subscribers: Vec<Listener>,
}

impl CartStore {
    /// Key the cart snapshot is persisted under.
    pub const STORAGE_KEY: &'static str = "cart-storage";

    /// Create a cart, rehydrating any persisted snapshot.
    ///
    /// An absent or corrupt snapshot yields an empty cart; the corrupt
    /// value is overwritten by the next mutation.
    #[must_use]
    pub fn new(persister: Arc<dyn Persister>) -> Self {
        let mut items: Vec<LineItem> =
            persist::load_or_default(persister.as_ref(), Self::STORAGE_KEY);
        // A hand-edited snapshot must not resurrect zero-quantity lines.
        items.retain(|line| line.quantity >= 1);
        Self {
            items,
            persister,
            subscribers: Vec::new(),
        }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `id`, if the product is in the cart.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.product.id == *id)
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line with the same id already exists its quantity is
    /// incremented and the stored product snapshot is left untouched.
    /// Otherwise a new quantity-1 line is appended.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += 1;
        } else {
            self.items.push(LineItem {
                product,
                quantity: 1,
            });
        }
        self.commit();
    }

    /// Remove the line for `id` entirely, whatever its quantity.
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|line| line.product.id != *id);
        if self.items.len() != before {
            self.commit();
        }
    }

    /// Increment the quantity of the line for `id`. No-op if absent.
    pub fn increase_qty(&mut self, id: &ProductId) {
        if let Some(line) = self.items.iter_mut().find(|line| line.product.id == *id) {
            line.quantity += 1;
            self.commit();
        }
    }

    /// Decrement the quantity of the line for `id`. No-op if absent.
    ///
    /// A line never reaches quantity 0: decrementing a quantity-1 line
    /// removes it from the cart.
    pub fn decrease_qty(&mut self, id: &ProductId) {
        let mut changed = false;
        self.items.retain_mut(|line| {
            if line.product.id == *id {
                changed = true;
                line.quantity -= 1;
                line.quantity >= 1
            } else {
                true
            }
        });
        if changed {
            self.commit();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.commit();
        }
    }

    /// Sum of `price × quantity` over all lines.
    ///
    /// Pure query over the listed prices; discounts are a display concern
    /// handled by [`Product::discounted_price`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines (the cart badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Register a listener invoked after each applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    fn commit(&self) {
        persist::persist_state(self.persister.as_ref(), Self::STORAGE_KEY, &self.items);
        for listener in &self.subscribers {
            listener();
        }
    }
}
