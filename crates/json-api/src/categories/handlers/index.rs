//! Category Index Handler

use salvo::prelude::*;

use crate::{
    categories::{
        errors::into_status_error,
        models::{CategoriesResponse, CategoryResponse},
    },
    extensions::*,
};

/// Category Index Handler
///
/// All categories ordered by name, each with its product count.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
    }))
}
