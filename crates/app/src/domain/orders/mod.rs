//! Orders

pub mod data;
pub mod errors;
pub mod models;
pub mod number;
pub mod records;
mod repository;
pub mod service;

pub use errors::{OrderValidationError, OrdersServiceError};
pub use service::*;
