//! Delete Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, orders::errors::into_status_error};

/// Delete Order Handler
#[endpoint(
    tags("dashboard"),
    summary = "Delete Order",
    security(("admin_cookie" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .orders
        .delete_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
