//! Update Order Status Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use souk_app::domain::orders::models::OrderStatus;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, OrderStatusRequest},
    },
};

/// Update Order Status Handler
///
/// Any status may follow any other.
#[endpoint(
    tags("dashboard"),
    summary = "Update Order Status",
    security(("admin_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<OrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .or_400("rejected order status")?;

    let order = state
        .app
        .orders
        .update_order_status(order.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
