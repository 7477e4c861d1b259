//! Category Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,

    /// Short highlight labels shown on the category card.
    pub featured: Vec<String>,

    /// Number of products currently filed under this category.
    pub product_count: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
