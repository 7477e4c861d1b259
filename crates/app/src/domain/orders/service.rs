//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use souk::pricing::OrderTotals;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::orders::{
        data::NewOrder,
        errors::OrdersServiceError,
        models::OrderStatus,
        number::order_number_candidates,
        records::{OrderRecord, OrderSummary, OrderUuid},
        repository::PgOrdersRepository,
    },
};

/// Order numbers tried before giving up on a checkout.
pub const ORDER_NUMBER_ATTEMPTS: u32 = 16;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        order.validate()?;

        let totals = OrderTotals::from_lines(&order.items);

        let mut tx = self.db.begin_transaction().await?;

        let mut placed = None;

        for candidate in order_number_candidates(Timestamp::now(), ORDER_NUMBER_ATTEMPTS) {
            if self
                .repository
                .create_order(&mut tx, order.uuid, &candidate, &order.customer, &totals)
                .await?
            {
                placed = Some(candidate);

                break;
            }

            debug!(order_number = %candidate, "order number taken, trying the next millisecond");
        }

        let Some(order_number) = placed else {
            return Err(OrdersServiceError::OrderNumberExhausted(ORDER_NUMBER_ATTEMPTS));
        };

        self.repository
            .create_order_items(&mut tx, order.uuid, &order.items)
            .await?;

        let created = self.repository.get_order(&mut tx, order.uuid).await?;

        tx.commit().await?;

        info!(
            %order_number,
            order = %created.uuid,
            items = created.items.len(),
            total = %created.total,
            "order placed"
        );

        Ok(created)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_order_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_order_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        info!(order = %order, status = status.as_str(), "order status changed");

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn order_summary(&self) -> Result<OrderSummary, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let summary = self.repository.order_summary(&mut tx).await?;

        tx.commit().await?;

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates a checkout and writes the order with all of its items, or nothing.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves every order with its items, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Sets an order's fulfilment status.
    async fn update_order_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order and its items.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;

    /// Order count, pending count and revenue.
    async fn order_summary(&self) -> Result<OrderSummary, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{
        domain::{
            orders::{
                OrderValidationError,
                data::fixtures::{customer, item, new_order},
                number::ORDER_NUMBER_PREFIX,
            },
            products::ProductsService,
        },
        test::{
            TestContext,
            helpers::{create_category, create_product, product_data},
        },
    };

    use super::*;

    async fn order_item_count(ctx: &TestContext) -> Result<i64, sqlx::Error> {
        query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(ctx.db.pool())
            .await
    }

    #[tokio::test]
    async fn create_order_computes_totals_and_starts_pending() -> TestResult {
        let ctx = TestContext::new().await;

        let order = ctx
            .orders
            .create_order(new_order(vec![item("Mug", 20, 2), item("Tea", 5, 1)]))
            .await?;

        assert_eq!(order.subtotal, Decimal::from(45), "subtotal mismatch");
        assert_eq!(order.shipping, Decimal::from(10), "shipping mismatch");
        assert_eq!(order.tax, Decimal::ZERO, "tax mismatch");
        assert_eq!(order.total, Decimal::from(55), "total mismatch");
        assert_eq!(order.status, OrderStatus::Pending, "new orders should be pending");
        assert!(
            order.order_number.starts_with(ORDER_NUMBER_PREFIX),
            "order number should carry the prefix, got {}",
            order.order_number
        );

        let names: Vec<&str> = order.items.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, vec!["Mug", "Tea"], "items should keep submission order");

        Ok(())
    }

    #[tokio::test]
    async fn invalid_order_writes_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        let mut order = new_order(vec![item("Mug", 20, 2)]);

        order.customer.email = String::new();

        let result = ctx.orders.create_order(order).await;

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::Invalid(OrderValidationError::BlankField("email")))
            ),
            "expected a blank email error, got {result:?}"
        );
        assert_eq!(ctx.orders.list_orders().await?.len(), 0, "no order should be written");
        assert_eq!(order_item_count(&ctx).await?, 0, "no items should be written");

        Ok(())
    }

    #[tokio::test]
    async fn taken_order_number_is_reported_without_aborting() -> TestResult {
        let ctx = TestContext::new().await;
        let repository = PgOrdersRepository::new();
        let totals = OrderTotals::from_lines(&[item("Mug", 20, 1)]);

        let mut tx = ctx.db.begin_test_transaction().await;

        let first = repository
            .create_order(&mut tx, OrderUuid::new(), "SS-TEST", &customer(), &totals)
            .await?;

        let second = repository
            .create_order(&mut tx, OrderUuid::new(), "SS-TEST", &customer(), &totals)
            .await?;

        let third = repository
            .create_order(&mut tx, OrderUuid::new(), "SS-TEST1", &customer(), &totals)
            .await?;

        assert!(first, "first insert should succeed");
        assert!(!second, "duplicate number should be refused");
        assert!(third, "transaction should still be usable after a collision");

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_checkouts_get_distinct_numbers() -> TestResult {
        let ctx = TestContext::new().await;

        let (first, second) = tokio::join!(
            ctx.orders.create_order(new_order(vec![item("Mug", 20, 1)])),
            ctx.orders.create_order(new_order(vec![item("Tea", 5, 1)])),
        );

        let (first, second) = (first?, second?);

        assert_ne!(first.order_number, second.order_number, "order numbers must be unique");

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_orders_is_newest_first_with_items() -> TestResult {
        let ctx = TestContext::new().await;

        let older = ctx
            .orders
            .create_order(new_order(vec![item("Mug", 20, 1)]))
            .await?;
        let newer = ctx
            .orders
            .create_order(new_order(vec![item("Tea", 5, 3), item("Dates", 8, 1)]))
            .await?;

        let orders = ctx.orders.list_orders().await?;

        let summary: Vec<(OrderUuid, usize)> = orders
            .iter()
            .map(|order| (order.uuid, order.items.len()))
            .collect();

        assert_eq!(
            summary,
            vec![(newer.uuid, 2), (older.uuid, 1)],
            "orders should be newest first with their own items"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_order_status_changes_only_status() -> TestResult {
        let ctx = TestContext::new().await;

        let order = ctx
            .orders
            .create_order(new_order(vec![item("Mug", 20, 1)]))
            .await?;

        let updated = ctx
            .orders
            .update_order_status(order.uuid, OrderStatus::Shipped)
            .await?;

        assert_eq!(updated.status, OrderStatus::Shipped, "status should change");
        assert_eq!(updated.total, order.total, "total should be untouched");
        assert_eq!(updated.items, order.items, "items should be untouched");

        Ok(())
    }

    #[tokio::test]
    async fn update_order_status_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_order_status(OrderUuid::new(), OrderStatus::Confirmed)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_order_removes_items() -> TestResult {
        let ctx = TestContext::new().await;

        let order = ctx
            .orders
            .create_order(new_order(vec![item("Mug", 20, 1), item("Tea", 5, 1)]))
            .await?;

        ctx.orders.delete_order(order.uuid).await?;

        assert!(
            matches!(
                ctx.orders.get_order(order.uuid).await,
                Err(OrdersServiceError::NotFound)
            ),
            "order should be gone"
        );
        assert_eq!(order_item_count(&ctx).await?, 0, "items should cascade");

        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_product_keeps_order_snapshots() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Kitchen").await?;
        let product = create_product(&ctx, category.uuid, "Mug", 20).await?;

        let mut line = item("Mug", 20, 2);

        line.product_uuid = product.uuid;

        let order = ctx.orders.create_order(new_order(vec![line])).await?;

        ctx.products.delete_product(product.uuid).await?;

        let reloaded = ctx.orders.get_order(order.uuid).await?;

        assert_eq!(reloaded.items, order.items, "snapshot should survive product deletion");

        Ok(())
    }

    #[tokio::test]
    async fn repricing_a_product_keeps_order_snapshots() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Kitchen").await?;
        let product = create_product(&ctx, category.uuid, "Mug", 20).await?;

        let mut line = item("Mug", 20, 2);

        line.product_uuid = product.uuid;

        let order = ctx.orders.create_order(new_order(vec![line])).await?;

        ctx.products
            .update_product(product.uuid, product_data(category.uuid, "Mug", 99))
            .await?;

        let reloaded = ctx.orders.get_order(order.uuid).await?;

        let prices: Vec<Decimal> = reloaded.items.iter().map(|item| item.price).collect();

        assert_eq!(prices, vec![Decimal::from(20)], "item price should keep the ordered price");
        assert_eq!(reloaded.subtotal, Decimal::from(40), "subtotal should be unchanged");
        assert_eq!(reloaded.total, Decimal::from(50), "total should be unchanged");
        assert_eq!(reloaded.items, order.items, "snapshot should survive repricing");

        Ok(())
    }

    #[tokio::test]
    async fn order_summary_counts_pending_and_revenue() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx
            .orders
            .create_order(new_order(vec![item("Mug", 20, 2)]))
            .await?;
        ctx.orders
            .create_order(new_order(vec![item("Tea", 5, 1)]))
            .await?;

        ctx.orders
            .update_order_status(first.uuid, OrderStatus::Delivered)
            .await?;

        let summary = ctx.orders.order_summary().await?;

        assert_eq!(
            summary,
            OrderSummary {
                order_count: 2,
                pending_count: 1,
                revenue: Decimal::from(65),
            },
            "summary mismatch"
        );

        Ok(())
    }

    #[tokio::test]
    async fn order_summary_is_zero_without_orders() -> TestResult {
        let ctx = TestContext::new().await;

        let summary = ctx.orders.order_summary().await?;

        assert_eq!(summary, OrderSummary::default(), "empty summary mismatch");

        Ok(())
    }
}
