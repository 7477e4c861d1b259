//! Image Uploads

pub(crate) mod image;
