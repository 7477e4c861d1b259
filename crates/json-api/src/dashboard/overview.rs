//! Dashboard Overview Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Store-wide counters shown on the dashboard landing page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OverviewResponse {
    pub products: u64,
    pub categories: u64,
    pub orders: u64,
    pub pending_orders: u64,

    /// Sum of every order total
    #[salvo(schema(value_type = String))]
    pub revenue: Decimal,
}

/// Dashboard Overview Handler
#[endpoint(
    tags("dashboard"),
    summary = "Dashboard Overview",
    security(("admin_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OverviewResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .app
        .products
        .count_products()
        .await
        .or_500("failed to count products")?;

    let categories = state
        .app
        .categories
        .count_categories()
        .await
        .or_500("failed to count categories")?;

    let summary = state
        .app
        .orders
        .order_summary()
        .await
        .or_500("failed to summarise orders")?;

    Ok(Json(OverviewResponse {
        products,
        categories,
        orders: summary.order_count,
        pending_orders: summary.pending_count,
        revenue: summary.revenue,
    }))
}
