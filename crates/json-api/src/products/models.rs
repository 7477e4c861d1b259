//! Product request and response bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::products::{
    data::{ProductData, Specification},
    records::ProductRecord,
};

/// One `label: value` row of a product's specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SpecificationBody {
    pub label: String,
    pub value: String,
}

impl From<Specification> for SpecificationBody {
    fn from(specification: Specification) -> Self {
        Self {
            label: specification.label,
            value: specification.value,
        }
    }
}

impl From<SpecificationBody> for Specification {
    fn from(body: SpecificationBody) -> Self {
        Self {
            label: body.label,
            value: body.value,
        }
    }
}

/// Product as the storefront and dashboard see it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub category_uuid: Uuid,

    /// Category name
    pub category: String,

    pub name: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Price before discount
    #[salvo(schema(value_type = Option<String>))]
    pub original_price: Option<Decimal>,

    /// Percentage off the original price
    pub discount: Option<u8>,

    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,

    #[salvo(schema(value_type = String))]
    pub rating: Decimal,

    pub reviews: u32,
    pub in_stock: bool,

    /// Units in stock
    pub quantity: u32,

    /// Units sold
    pub sales: u32,

    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_flash_sale: bool,

    /// Only populated for single product reads
    pub specifications: Vec<SpecificationBody>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            uuid: product.uuid.into(),
            category_uuid: product.category_uuid.into(),
            category: product.category_name,
            name: product.name,
            price: product.price,
            original_price: product.original_price,
            discount: product.discount,
            description: product.description,
            full_description: product.full_description,
            image: product.image,
            rating: product.rating,
            reviews: product.reviews,
            in_stock: product.in_stock,
            quantity: product.quantity,
            sales: product.sales,
            is_featured: product.is_featured,
            is_best_seller: product.is_best_seller,
            is_flash_sale: product.is_flash_sale,
            specifications: product.specifications.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Product list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

impl From<Vec<ProductRecord>> for ProductsResponse {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}

const fn default_in_stock() -> bool {
    true
}

/// Editable product fields, shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub category_uuid: Uuid,
    pub name: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub original_price: Option<Decimal>,

    #[serde(default)]
    pub discount: Option<u8>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub full_description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    #[salvo(schema(value_type = String))]
    pub rating: Decimal,

    #[serde(default)]
    pub reviews: u32,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub sales: u32,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_best_seller: bool,

    #[serde(default)]
    pub is_flash_sale: bool,

    #[serde(default)]
    pub specifications: Vec<SpecificationBody>,
}

impl From<ProductRequest> for ProductData {
    fn from(request: ProductRequest) -> Self {
        Self {
            category_uuid: request.category_uuid.into(),
            name: request.name,
            price: request.price,
            original_price: request.original_price,
            discount: request.discount,
            description: request.description,
            full_description: request.full_description,
            image: request.image,
            rating: request.rating,
            reviews: request.reviews,
            in_stock: request.in_stock,
            quantity: request.quantity,
            sales: request.sales,
            is_featured: request.is_featured,
            is_best_seller: request.is_best_seller,
            is_flash_sale: request.is_flash_sale,
            specifications: request.specifications.into_iter().map(Into::into).collect(),
        }
    }
}
