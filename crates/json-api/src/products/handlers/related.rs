//! Related Products Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use souk_app::domain::products::data::RELATED_LIMIT;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
};

/// Related Products Handler
///
/// Other products from the same category, newest first.
#[endpoint(tags("products"), summary = "List Related Products")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let related = state
        .app
        .products
        .list_related_products(
            product.uuid,
            product.category_uuid,
            limit.into_inner().unwrap_or(RELATED_LIMIT),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(related.into()))
}
