//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Invalid(reason) => StatusError::bad_request().brief(reason.to_string()),
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::OrderNumberExhausted(attempts) => {
            error!("no free order number after {attempts} attempts");

            StatusError::service_unavailable().brief("Could not place order, please retry")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
