//! Products Data

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{
    categories::{ALL_CATEGORIES, records::CategoryUuid},
    products::records::ProductUuid,
};

/// Number of products in the storefront's featured strip.
pub const FEATURED_LIMIT: u32 = 4;

/// Number of products in the storefront's best seller strip.
pub const BEST_SELLERS_LIMIT: u32 = 4;

/// Number of products in the storefront's flash sale strip.
pub const FLASH_SALE_LIMIT: u32 = 6;

/// Number of related products shown on a product page.
pub const RELATED_LIMIT: u32 = 3;

/// A single `label: value` row in a product's specification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// Editable product fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductData {
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,

    /// Percentage off `original_price`.
    pub discount: Option<u8>,

    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub rating: Decimal,
    pub reviews: u32,
    pub in_stock: bool,

    /// Units in stock.
    pub quantity: u32,

    /// Units sold, used for best seller ordering.
    pub sales: u32,

    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_flash_sale: bool,

    /// Specification rows in display order. Replaced wholesale on update.
    pub specifications: Vec<Specification>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub data: ProductData,
}

/// Storefront ordering for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Most recently created first.
    #[default]
    Newest,

    /// Cheapest first.
    PriceLow,

    /// Most expensive first.
    PriceHigh,

    /// Highest rated first.
    Rating,

    /// Most units sold first.
    BestSelling,
}

impl ProductSort {
    /// Query-string form of the sort.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::BestSelling => "best-selling",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product sort: {0}")]
pub struct UnknownProductSort(pub String);

impl FromStr for ProductSort {
    type Err = UnknownProductSort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "best-selling" => Ok(Self::BestSelling),
            other => Err(UnknownProductSort(other.to_string())),
        }
    }
}

/// Product listing filter.
///
/// Flags narrow the listing when set; an unset flag does not exclude anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Category name. `"All"` and blank names mean every category.
    pub category: Option<String>,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_flash_sale: bool,
    pub sort: ProductSort,
    pub limit: Option<u32>,
}

impl ProductFilter {
    /// Featured products strip.
    #[must_use]
    pub fn featured() -> Self {
        Self {
            is_featured: true,
            limit: Some(FEATURED_LIMIT),
            ..Self::default()
        }
    }

    /// Best sellers strip, most sold first.
    #[must_use]
    pub fn best_sellers() -> Self {
        Self {
            is_best_seller: true,
            sort: ProductSort::BestSelling,
            limit: Some(BEST_SELLERS_LIMIT),
            ..Self::default()
        }
    }

    /// Flash sale strip.
    #[must_use]
    pub fn flash_sale() -> Self {
        Self {
            is_flash_sale: true,
            limit: Some(FLASH_SALE_LIMIT),
            ..Self::default()
        }
    }

    /// Category name to filter on, if any.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != ALL_CATEGORIES)
    }
}
