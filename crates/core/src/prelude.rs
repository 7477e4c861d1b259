//! Souk Prelude

pub use crate::{
    cart::{CART_STORAGE_KEY, CartLineItem, CartStore, NewCartLineItem},
    pricing::{FLAT_SHIPPING_FEE, OrderLine, OrderTotals},
    storage::{CartStorage, FileStorage, MemoryStorage, StorageError},
};
