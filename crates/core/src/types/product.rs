//! Product value object consumed from the catalog backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as supplied by the catalog collaborator.
///
/// This is a value object: the client-state layer never fetches or mutates
/// products, it only snapshots them into the cart and wishlist. `id`,
/// `title`, and `price` are always present; everything else is passed
/// through unchanged if the backend provided it.
///
/// Prices use [`Decimal`] rather than floating point so that cart totals
/// are exact fixed-point sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned product identity.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the storefront currency's standard unit.
    pub price: Decimal,
    /// Product image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Discount percentage (0-100), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

impl Product {
    /// Create a product with the minimum required fields.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: None,
            category: None,
            discount: None,
        }
    }

    /// Attach an image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach a category name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a discount percentage.
    #[must_use]
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Unit price after applying the optional discount percentage.
    ///
    /// Returns the listed price unchanged when no discount is present.
    #[must_use]
    pub fn discounted_price(&self) -> Decimal {
        self.discount.map_or(self.price, |pct| {
            self.price - self.price * pct / Decimal::ONE_HUNDRED
        })
    }
}
