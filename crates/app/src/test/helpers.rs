//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductData},
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

/// Admin password every [`TestContext`] is configured with.
pub(crate) const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
            description: None,
            image: None,
            featured: Vec::new(),
        })
        .await
}

/// Minimal in-stock product with no flags set.
pub(crate) fn product_data(category: CategoryUuid, name: &str, price: i64) -> ProductData {
    ProductData {
        category_uuid: category,
        name: name.to_string(),
        price: Decimal::from(price),
        original_price: None,
        discount: None,
        description: None,
        full_description: None,
        image: None,
        rating: Decimal::ZERO,
        reviews: 0,
        in_stock: true,
        quantity: 10,
        sales: 0,
        is_featured: false,
        is_best_seller: false,
        is_flash_sale: false,
        specifications: Vec::new(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    category: CategoryUuid,
    name: &str,
    price: i64,
) -> Result<ProductRecord, ProductsServiceError> {
    create_product_with(ctx, category, name, |data| {
        data.price = Decimal::from(price);
    })
    .await
}

pub(crate) async fn create_product_with(
    ctx: &TestContext,
    category: CategoryUuid,
    name: &str,
    customize: impl FnOnce(&mut ProductData),
) -> Result<ProductRecord, ProductsServiceError> {
    let mut data = product_data(category, name, 1);

    customize(&mut data);

    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            data,
        })
        .await
}
