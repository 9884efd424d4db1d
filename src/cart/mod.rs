//! Shopping cart store with write-through persistence.
//!
//! The store is constructed once with an injected [`Storage`] and rehydrates
//! from it immediately. Every mutating call writes the full collection back
//! exactly once. Persistence problems are logged and never surface to callers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::Product;

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

/// Storage key of the serialized cart.
pub const CART_KEY: &str = "nutriexplorer_cart";

/// A product in the cart together with its quantity.
///
/// Serialized as the product object with an extra `cartQuantity` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product snapshot taken when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least 1 for every stored item.
    #[serde(rename = "cartQuantity", default, deserialize_with = "de_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// What: Product code of this line item.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.product.code
    }
}

/// What: Decode a quantity leniently; negative, fractional or malformed values become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn de_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|v| v.is_finite() && *v >= 1.0)
        .map_or(0, |v| v.floor().min(f64::from(u32::MAX)) as u32))
}

/// Ordered cart collection keyed by product code.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
    items: Vec<CartItem>,
    is_open: bool,
}

impl<S: Storage> CartStore<S> {
    /// What: Construct the store and rehydrate it from `storage`.
    ///
    /// Inputs:
    /// - `storage`: Persistence port; read once here
    ///
    /// Output:
    /// - Store holding the persisted items in their stored order.
    ///
    /// Details:
    /// - Missing or malformed data yields an empty cart (logged, not returned).
    /// - Items with quantity below 1 are dropped; repeated codes are folded
    ///   into the first occurrence.
    pub fn load(storage: S) -> Self {
        let mut items: Vec<CartItem> = Vec::new();
        if let Some(raw) = storage.read(CART_KEY) {
            match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(list) => {
                    for item in list.into_iter().filter(|i| i.quantity >= 1) {
                        if let Some(existing) = items.iter_mut().find(|e| e.code() == item.code()) {
                            existing.quantity = existing.quantity.saturating_add(item.quantity);
                        } else {
                            items.push(item);
                        }
                    }
                    tracing::info!(count = items.len(), "[Persist] Cart loaded");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "[Persist] Discarding malformed cart data");
                }
            }
        }
        Self {
            storage,
            items,
            is_open: false,
        }
    }

    /// What: Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// What: Line item for `code`, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.code() == code)
    }

    /// What: Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// What: Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// What: Whether the cart panel should be shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// What: Show or hide the cart panel.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// What: Add one unit of `product`.
    ///
    /// Details:
    /// - Existing code: quantity + 1. New code: appended with quantity 1.
    /// - Reveals the cart panel.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.code == product.code) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
        self.is_open = true;
        self.persist();
    }

    /// What: Remove the line item for `code`; absent codes are ignored.
    pub fn remove(&mut self, code: &str) {
        self.items.retain(|i| i.code() != code);
        self.persist();
    }

    /// What: Set the quantity of an existing line item.
    ///
    /// Inputs:
    /// - `code`: Product code
    /// - `quantity`: New quantity; below 1 removes the item
    ///
    /// Details:
    /// - Unknown codes are left alone; nothing is inserted.
    pub fn set_quantity(&mut self, code: &str, quantity: i64) {
        if quantity < 1 {
            self.remove(code);
            return;
        }
        let q = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.code == code) {
            item.quantity = q;
        }
        self.persist();
    }

    /// What: Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// What: Sum of all quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// What: Borrow the storage port.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// What: Write the whole collection under [`CART_KEY`].
    fn persist(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(s) => {
                if let Err(e) = self.storage.write(CART_KEY, &s) {
                    tracing::warn!(error = %e, "[Persist] Failed to write cart");
                } else {
                    tracing::debug!(
                        items = self.items.len(),
                        bytes = s.len(),
                        "[Persist] Cart persisted"
                    );
                }
            }
            Err(e) => tracing::warn!(error = %e, "[Persist] Failed to serialize cart"),
        }
    }
}
