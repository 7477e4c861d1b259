//! Categories

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::CategoriesServiceError;
pub use service::*;

/// Category name meaning "every category" in storefront filters.
pub const ALL_CATEGORIES: &str = "All";
