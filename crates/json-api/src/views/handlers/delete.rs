//! Clear Views Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    views::{ViewRequest, errors::into_status_error},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ViewsClearedResponse {
    /// Number of view records removed
    pub cleared: u64,
}

/// Clear Views Handler
///
/// Removes every recorded view of a product.
#[endpoint(tags("views"), summary = "Clear Product Views")]
pub(crate) async fn handler(
    json: JsonBody<ViewRequest>,
    depot: &mut Depot,
) -> Result<Json<ViewsClearedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let cleared = state
        .app
        .views
        .clear_views(json.into_inner().product_id.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ViewsClearedResponse { cleared }))
}
