//! Product Views
//!
//! Anonymous "someone looked at this product" records.

pub mod errors;
mod repository;
pub mod service;

pub use errors::ViewsServiceError;
pub use service::*;

/// Device id stored for every view until visitors can be told apart.
pub const ANONYMOUS_DEVICE: &str = "anonymous";
