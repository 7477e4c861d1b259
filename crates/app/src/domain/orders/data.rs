//! Orders Data

use rust_decimal::Decimal;
use souk::pricing::OrderLine;

use crate::domain::{
    orders::{
        errors::OrderValidationError,
        models::{City, DeliveryPeriod},
        records::OrderUuid,
    },
    products::records::ProductUuid,
};

/// Contact and delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: City,
    pub delivery_period: DeliveryPeriod,
}

/// Line snapshot as submitted from the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
}

impl OrderLine for NewOrderItem {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer: Customer,
    pub items: Vec<NewOrderItem>,
}

impl NewOrder {
    /// Check the checkout payload before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a blank contact field, an empty item list, or an
    /// item with a zero quantity or negative price.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        let customer = &self.customer;

        for (field, value) in [
            ("first_name", &customer.first_name),
            ("last_name", &customer.last_name),
            ("email", &customer.email),
            ("phone", &customer.phone),
            ("address", &customer.address),
        ] {
            if value.trim().is_empty() {
                return Err(OrderValidationError::BlankField(field));
            }
        }

        if self.items.is_empty() {
            return Err(OrderValidationError::NoItems);
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(OrderValidationError::ZeroQuantity(index));
            }

            if item.price.is_sign_negative() && !item.price.is_zero() {
                return Err(OrderValidationError::NegativePrice(index));
            }

            if item.name.trim().is_empty() {
                return Err(OrderValidationError::BlankItemName(index));
            }
        }

        Ok(())
    }
}
