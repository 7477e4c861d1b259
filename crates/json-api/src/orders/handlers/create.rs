//! Checkout Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use souk_app::domain::orders::{OrdersServiceError, data::NewOrder};

use crate::{
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
    orders::{
        errors::into_status_error,
        models::{CheckoutRequest, OrderResponse},
    },
};

/// Checkout Handler
///
/// Places an order from the cart snapshot. Totals are computed server side; the client's
/// cart should be cleared once this returns 201.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid checkout"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let order = NewOrder::try_from(json.into_inner()).or_400("rejected checkout")?;

    let order = match state.app.orders.create_order(order).await {
        Ok(order) => order,
        Err(error) => {
            record_checkout(match &error {
                OrdersServiceError::Invalid(_)
                | OrdersServiceError::MissingRequiredData
                | OrdersServiceError::InvalidData => CheckoutOutcome::Rejected,
                _ => CheckoutOutcome::Failed,
            });

            return Err(into_status_error(error));
        }
    };

    record_checkout(CheckoutOutcome::Created);

    info!(order_number = %order.order_number, total = %order.total, "order placed");

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
