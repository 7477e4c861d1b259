//! Orders Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use souk::pricing::OrderTotals;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{convert_column, encode_column},
    domain::{
        orders::{
            data::{Customer, NewOrderItem},
            models::OrderStatus,
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderSummary, OrderUuid},
        },
        products::records::ProductUuid,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("sql/list_order_items.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");
const ORDER_SUMMARY_SQL: &str = include_str!("sql/order_summary.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the order row unless `order_number` is already taken.
    ///
    /// Returns `false` on an order number collision. The transaction stays usable.
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        order_number: &str,
        customer: &Customer,
        totals: &OrderTotals,
    ) -> Result<bool, sqlx::Error> {
        let inserted = query_scalar::<Postgres, Uuid>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(order_number)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.address)
            .bind(customer.city.as_str())
            .bind(customer.delivery_period.as_str())
            .bind(totals.subtotal)
            .bind(totals.shipping)
            .bind(totals.tax)
            .bind(totals.total)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(inserted.is_some())
    }

    pub(crate) async fn create_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        items: &[NewOrderItem],
    ) -> Result<(), sqlx::Error> {
        for (position, item) in items.iter().enumerate() {
            query(CREATE_ORDER_ITEM_SQL)
                .bind(OrderItemUuid::new().into_uuid())
                .bind(order.into_uuid())
                .bind(encode_column::<_, i32>(position)?)
                .bind(item.product_uuid.into_uuid())
                .bind(&item.name)
                .bind(item.price)
                .bind(encode_column::<_, i32>(item.quantity)?)
                .bind(item.image.as_deref())
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        record.items = self.list_order_items(tx, &[order.into_uuid()]).await?;

        Ok(record)
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let mut orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let mut by_order: FxHashMap<OrderUuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for item in self.list_order_items(tx, &uuids).await? {
            by_order.entry(item.order_uuid).or_default().push(item);
        }

        for order in &mut orders {
            order.items = by_order.remove(&order.uuid).unwrap_or_default();
        }

        Ok(orders)
    }

    async fn list_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(LIST_ORDER_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        record.items = self.list_order_items(tx, &[order.into_uuid()]).await?;

        Ok(record)
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn order_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<OrderSummary, sqlx::Error> {
        let row = query(ORDER_SUMMARY_SQL).fetch_one(&mut **tx).await?;

        Ok(OrderSummary {
            order_count: convert_column("order_count", row.try_get::<i64, _>("order_count")?)?,
            pending_count: convert_column(
                "pending_count",
                row.try_get::<i64, _>("pending_count")?,
            )?,
            revenue: row.try_get("revenue")?,
        })
    }
}

fn parse_column<T>(row: &PgRow, index: &str) -> sqlx::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(index)?;

    raw.parse().map_err(|error| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(error),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            address: row.try_get("address")?,
            city: parse_column(row, "city")?,
            delivery_period: parse_column(row, "delivery_period")?,
            subtotal: row.try_get("subtotal")?,
            shipping: row.try_get("shipping")?,
            tax: row.try_get("tax")?,
            total: row.try_get("total")?,
            status: parse_column(row, "status")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            quantity: convert_column("quantity", row.try_get::<i32, _>("quantity")?)?,
            image: row.try_get("image")?,
        })
    }
}
