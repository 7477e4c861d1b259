//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use souk::pricing::OrderLine;

use crate::{
    domain::{
        orders::models::{City, DeliveryPeriod, OrderStatus},
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: City,
    pub delivery_period: DeliveryPeriod,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order line snapshot.
///
/// `product_uuid` is not a live reference: the product may since have changed or been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
}

impl OrderLine for OrderItemRecord {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Aggregate order figures for the dashboard overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_count: u64,
    pub pending_count: u64,

    /// Sum of every order total, whatever its status.
    pub revenue: Decimal,
}
