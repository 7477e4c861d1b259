//! Create Category Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    categories::{
        errors::into_status_error,
        models::{CategoryRequest, CategoryResponse},
    },
    extensions::*,
};

/// Create Category Handler
#[endpoint(
    tags("dashboard"),
    summary = "Create Category",
    security(("admin_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::CONFLICT, description = "Category name already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid category"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let category = state
        .app
        .categories
        .create_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/categories/{}", category.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}
