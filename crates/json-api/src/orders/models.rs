//! Order request and response bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::orders::{
    data::{Customer, NewOrder, NewOrderItem},
    models::UnknownValue,
    records::{OrderItemRecord, OrderRecord, OrderUuid},
};

/// Line snapshot taken from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutItem {
    pub product_id: Uuid,
    pub name: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub quantity: u32,

    #[serde(default)]
    pub image: Option<String>,
}

/// Checkout form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,

    /// One of the serviceable cities, e.g. `"Sharm El Sheikh"`
    pub city: String,

    /// `morning`, `afternoon`, `evening` or `night`
    pub delivery_period: String,

    pub items: Vec<CheckoutItem>,
}

impl TryFrom<CheckoutRequest> for NewOrder {
    type Error = UnknownValue;

    fn try_from(request: CheckoutRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: OrderUuid::new(),
            customer: Customer {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone: request.phone,
                address: request.address,
                city: request.city.parse()?,
                delivery_period: request.delivery_period.parse()?,
            },
            items: request
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    product_uuid: item.product_id.into(),
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                    image: item.image,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_id: Uuid,
    pub name: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub quantity: u32,
    pub image: Option<String>,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_id: item.product_uuid.into(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    /// Customer facing reference, `SS-` followed by base 36 digits
    pub order_number: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub delivery_period: String,

    /// Human readable delivery window
    pub delivery_window: String,

    #[salvo(schema(value_type = String))]
    pub subtotal: Decimal,

    #[salvo(schema(value_type = String))]
    pub shipping: Decimal,

    #[salvo(schema(value_type = String))]
    pub tax: Decimal,

    #[salvo(schema(value_type = String))]
    pub total: Decimal,

    pub status: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            order_number: order.order_number,
            first_name: order.first_name,
            last_name: order.last_name,
            email: order.email,
            phone: order.phone,
            address: order.address,
            city: order.city.as_str().to_owned(),
            delivery_period: order.delivery_period.as_str().to_owned(),
            delivery_window: order.delivery_period.label().to_owned(),
            subtotal: order.subtotal,
            shipping: order.shipping,
            tax: order.tax,
            total: order.total,
            status: order.status.as_str().to_owned(),
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusRequest {
    /// `PENDING`, `CONFIRMED`, `PROCESSING`, `SHIPPED`, `DELIVERED` or `CANCELLED`
    pub status: String,
}
