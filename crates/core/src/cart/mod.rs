//! Cart
//!
//! [`CartStore`] is the single source of truth for a shopper's pending selections. It keeps
//! at most one line per product id, never holds a line with a quantity below one, and
//! writes the whole item list to its storage slot after every mutation.
//!
//! One store is expected per session. Two stores sharing the same storage slot (for example
//! two browser tabs) race with last-write-wins semantics.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    pricing::{OrderLine, OrderTotals},
    storage::{CartStorage, StorageError},
};

mod items;

pub use items::{CartLineItem, CheckoutLine, LineItemError, NewCartLineItem};

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "souk-cart";

#[derive(Debug, Error)]
enum RehydrateError {
    #[error("could not read stored cart")]
    Storage(#[from] StorageError),

    #[error("could not parse stored cart")]
    Parse(#[from] serde_json::Error),

    #[error("stored cart contains id {0:?} more than once")]
    DuplicateId(String),

    #[error("stored cart line {0:?} has a zero quantity")]
    ZeroQuantity(String),

    #[error("stored cart line {0:?} has a negative price")]
    NegativePrice(String),

    #[error("stored cart contains a line with an empty id")]
    EmptyId,
}

/// Shopper cart backed by a persistence port.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    items: Vec<CartLineItem>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    ///
    /// A missing slot, an unreadable slot, malformed JSON and a stored list that breaks the
    /// cart invariants all produce an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match rehydrate(&storage) {
            Ok(items) => items,
            Err(error) => {
                debug!("discarding stored cart: {error}");

                Vec::new()
            }
        };

        Self { items, storage }
    }

    /// Current line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line item for the given product id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |sum, item| sum.saturating_add(u64::from(item.quantity())))
    }

    /// Sum of `price × quantity` across all lines.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()))
    }

    /// Subtotal, shipping and total as the checkout page shows them.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from_lines(&self.items)
    }

    /// Line snapshot to submit with a checkout.
    pub fn checkout_lines(&self) -> Vec<CheckoutLine> {
        self.items.iter().map(CheckoutLine::from).collect()
    }

    /// Add `quantity` units of a product.
    ///
    /// When the product is already in the cart only its quantity grows; the name, price and
    /// image captured by the first add are kept. A `quantity` of zero is treated as one.
    pub fn add_item(&mut self, item: NewCartLineItem, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|line| line.id() == item.id()) {
            existing.add_quantity(quantity);
        } else {
            self.items.push(item.into_line_item(quantity));
        }

        self.persist();
    }

    /// Remove the line for `id`, if any.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id() != id);

        self.persist();
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or below removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);

            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(existing) = self.items.iter_mut().find(|line| line.id() == id) {
            existing.set_quantity(quantity);
        }

        self.persist();
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();

        self.persist();
    }

    /// Empty the cart once its checkout has been accepted.
    pub fn complete_checkout(&mut self) {
        debug!(lines = self.items.len(), "clearing cart after checkout");

        self.clear();
    }

    /// Storage backing this cart.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, dropping the in-memory cart.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!("failed to serialize cart: {error}");

                return;
            }
        };

        if let Err(error) = self.storage.write(CART_STORAGE_KEY, &serialized) {
            warn!("failed to persist cart: {error}");
        }
    }
}

fn rehydrate<S: CartStorage>(storage: &S) -> Result<Vec<CartLineItem>, RehydrateError> {
    let Some(stored) = storage.read(CART_STORAGE_KEY)? else {
        return Ok(Vec::new());
    };

    let items: Vec<CartLineItem> = serde_json::from_str(&stored)?;

    let mut seen = FxHashSet::default();

    for item in &items {
        if item.id().trim().is_empty() {
            return Err(RehydrateError::EmptyId);
        }

        if item.quantity() == 0 {
            return Err(RehydrateError::ZeroQuantity(item.id().to_owned()));
        }

        if item.price().is_sign_negative() && !item.price().is_zero() {
            return Err(RehydrateError::NegativePrice(item.id().to_owned()));
        }

        if !seen.insert(item.id()) {
            return Err(RehydrateError::DuplicateId(item.id().to_owned()));
        }
    }

    Ok(items)
}
