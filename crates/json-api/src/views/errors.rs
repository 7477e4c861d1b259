//! View Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::views::ViewsServiceError;

pub(crate) fn into_status_error(error: ViewsServiceError) -> StatusError {
    match error {
        ViewsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ViewsServiceError::Sql(source) => {
            error!("view storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
