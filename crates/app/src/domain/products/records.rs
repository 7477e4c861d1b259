//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use souk::cart::{LineItemError, NewCartLineItem};

use crate::{
    domain::{categories::records::CategoryUuid, products::data::Specification},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub category_uuid: CategoryUuid,
    pub category_name: String,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub discount: Option<u8>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub rating: Decimal,
    pub reviews: u32,
    pub in_stock: bool,
    pub quantity: u32,
    pub sales: u32,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_flash_sale: bool,

    /// Only populated by single-product reads.
    pub specifications: Vec<Specification>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Capture the product's current name, price and image as a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored price is negative.
    pub fn cart_item(&self) -> Result<NewCartLineItem, LineItemError> {
        NewCartLineItem::new(
            self.uuid.to_string(),
            self.name.clone(),
            self.price,
            self.image.clone(),
        )
    }
}
