//! Cart line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::OrderLine;

/// Errors raised when building a [`NewCartLineItem`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineItemError {
    /// The product identifier was blank.
    #[error("line item id cannot be empty")]
    EmptyId,

    /// The unit price was below zero.
    #[error("line item price cannot be negative: {0}")]
    NegativePrice(Decimal),
}

/// Product details captured when a product is first added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLineItem {
    id: String,
    name: String,
    price: Decimal,
    image: Option<String>,
}

impl NewCartLineItem {
    /// Capture a product for the cart.
    ///
    /// # Errors
    ///
    /// - [`LineItemError::EmptyId`]: `id` is empty or whitespace.
    /// - [`LineItemError::NegativePrice`]: `price` is below zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: Option<String>,
    ) -> Result<Self, LineItemError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(LineItemError::EmptyId);
        }

        if price.is_sign_negative() && !price.is_zero() {
            return Err(LineItemError::NegativePrice(price));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            image,
        })
    }

    /// Product identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn into_line_item(self, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity,
        }
    }
}

/// One product in the cart.
///
/// This is also the persisted shape: `{id, name, price, image, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    id: String,
    name: String,
    price: Decimal,
    image: Option<String>,
    quantity: u32,
}

impl CartLineItem {
    /// Product identifier, unique within a cart.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name as captured when first added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price as captured when first added.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Image URL as captured when first added.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl OrderLine for CartLineItem {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Line snapshot submitted with a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// Product identifier.
    pub product_id: String,

    /// Product name at the time it was added.
    pub name: String,

    /// Unit price at the time it was added.
    pub price: Decimal,

    /// Number of units.
    pub quantity: u32,

    /// Product image at the time it was added.
    pub image: Option<String>,
}

impl From<&CartLineItem> for CheckoutLine {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

impl OrderLine for CheckoutLine {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
