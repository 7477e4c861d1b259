//! Product Views

mod errors;
mod handlers;

pub(crate) use handlers::*;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product a view is recorded against or cleared for.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ViewRequest {
    pub product_id: Uuid,
}
