//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::debug;

use souk_app::domain::products::data::{ProductFilter, ProductSort};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
};

/// Product Index Handler
///
/// Lists products for the storefront grid and the dashboard table. Every query parameter is
/// optional; an unrecognised `sort` falls back to newest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    featured: QueryParam<bool, false>,
    best_seller: QueryParam<bool, false>,
    flash_sale: QueryParam<bool, false>,
    sort: QueryParam<String, false>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let sort = sort.into_inner().map_or_else(ProductSort::default, |value| {
        value.parse().unwrap_or_else(|error| {
            debug!("{error}, using newest first");

            ProductSort::default()
        })
    });

    let filter = ProductFilter {
        category: category.into_inner(),
        is_featured: featured.into_inner().unwrap_or_default(),
        is_best_seller: best_seller.into_inner().unwrap_or_default(),
        is_flash_sale: flash_sale.into_inner().unwrap_or_default(),
        sort,
        limit: limit.into_inner(),
    };

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
