//! Assets service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetsServiceError {
    #[error("content type {0:?} is not an accepted image type")]
    InvalidType(Option<String>),

    #[error("upload of {0} bytes exceeds the size limit")]
    TooLarge(usize),

    #[error("asset storage error")]
    Storage(#[from] io::Error),
}
