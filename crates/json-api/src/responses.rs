//! Shared response bodies.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error body for routes whose clients read `error` directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human readable reason
    pub error: String,
}

/// Render `{error}` with the given status.
pub(crate) fn render_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}

/// Acknowledgement for writes with nothing else to report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuccessResponse {
    /// Always `true`
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}
