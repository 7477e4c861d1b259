//! Assets
//!
//! Image uploads for product and category artwork.

pub mod errors;
pub mod service;
pub mod store;

pub use errors::AssetsServiceError;
pub use service::*;
pub use store::{AssetStore, LocalAssetStore, MockAssetStore};

/// Largest accepted upload, inclusive.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted upload content types.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Extension used when the uploaded file name has no usable one.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";
