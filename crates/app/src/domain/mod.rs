//! Souk Domain Concerns

pub mod assets;
pub mod categories;
pub mod orders;
pub mod products;
pub mod views;
