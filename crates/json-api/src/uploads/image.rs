//! Image Upload Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use souk_app::domain::assets::{AssetsServiceError, MAX_IMAGE_BYTES, NewAsset};

use crate::{extensions::*, responses::render_error};

/// Multipart bodies larger than this are rejected before the form is parsed.
const MAX_UPLOAD_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Public URL of the stored image
    pub path: String,
}

/// Image Upload Handler
///
/// Accepts a multipart form with a single `file` field.
#[endpoint(
    tags("dashboard"),
    summary = "Upload Image",
    security(("admin_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing, oversized or unsupported file"),
    ),
)]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    req.set_secure_max_size(MAX_UPLOAD_BODY_BYTES);

    let Some(file) = req.file("file").await else {
        render_error(res, StatusCode::BAD_REQUEST, "No file provided");

        return;
    };

    let bytes = match tokio::fs::read(file.path()).await {
        Ok(bytes) => bytes,
        Err(source) => {
            error!("failed to read uploaded file: {source}");

            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload image");

            return;
        }
    };

    let asset = NewAsset {
        file_name: file.name().map(str::to_owned),
        content_type: file
            .content_type()
            .map(|mime| mime.essence_str().to_owned()),
        bytes,
    };

    match state.app.assets.upload_image(asset).await {
        Ok(stored) => {
            info!(name = %stored.name, "image uploaded");

            res.render(Json(UploadResponse { path: stored.url }));
        }
        Err(AssetsServiceError::InvalidType(_)) => {
            render_error(res, StatusCode::BAD_REQUEST, "Invalid file type");
        }
        Err(AssetsServiceError::TooLarge(_)) => {
            render_error(
                res,
                StatusCode::BAD_REQUEST,
                format!("File too large (max {}MB)", MAX_IMAGE_BYTES / (1024 * 1024)),
            );
        }
        Err(AssetsServiceError::Storage(source)) => {
            error!("failed to store uploaded image: {source}");

            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload image");
        }
    }
}
