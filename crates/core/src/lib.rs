//! Souk
//!
//! Shopper-side cart state for the Souk storefront: line items, derived totals and
//! durable round-trips through a pluggable client-local storage slot.

pub mod cart;
pub mod pricing;
pub mod storage;

pub mod prelude;
