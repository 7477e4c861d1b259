//! Record View Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    responses::SuccessResponse,
    views::{ViewRequest, errors::into_status_error},
};

/// Record View Handler
///
/// Records one anonymous view of a product page.
#[endpoint(
    tags("views"),
    summary = "Record Product View",
    responses(
        (status_code = StatusCode::OK, description = "View recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ViewRequest>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .views
        .record_view(json.into_inner().product_id.into())
        .await
        .map_err(into_status_error)?;

    Ok(SuccessResponse::ok())
}
