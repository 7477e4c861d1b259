//! Category request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::categories::{
    data::{CategoryUpdate, NewCategory},
    records::{CategoryRecord, CategoryUuid},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,

    /// Highlight labels shown on the category card
    pub featured: Vec<String>,

    /// Number of products filed under the category
    pub product_count: u64,

    pub created_at: String,
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            uuid: category.uuid.into(),
            name: category.name,
            description: category.description,
            image: category.image,
            featured: category.featured,
            product_count: category.product_count,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Editable category fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryRequest {
    /// Client chosen identifier, only read on create
    #[serde(default)]
    pub uuid: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub featured: Vec<String>,
}

impl From<CategoryRequest> for NewCategory {
    fn from(request: CategoryRequest) -> Self {
        Self {
            uuid: request.uuid.map_or_else(CategoryUuid::new, Into::into),
            name: request.name,
            description: request.description,
            image: request.image,
            featured: request.featured,
        }
    }
}

impl From<CategoryRequest> for CategoryUpdate {
    fn from(request: CategoryRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image: request.image,
            featured: request.featured,
        }
    }
}
