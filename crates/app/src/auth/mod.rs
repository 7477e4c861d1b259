//! Authentication
//!
//! The dashboard is gated by a single shared admin password. A successful login issues an
//! opaque session token; only its SHA-256 hash is persisted.

mod errors;
mod models;
mod password;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use password::AdminPassword;
pub use service::*;
pub use token::*;
