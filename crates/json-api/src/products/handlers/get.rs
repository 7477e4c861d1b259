//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Get Product Handler
///
/// Returns a product with its specification table.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::products::{
        MockProductsService, ProductsServiceError, data::Specification, records::ProductUuid,
    };

    use crate::{
        products::models::SpecificationBody,
        test_helpers::{make_product, service, with_products},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        service(
            with_products(products),
            Router::with_path("products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn product_is_returned_with_specifications() -> TestResult {
        let uuid = ProductUuid::new();

        let mut record = make_product(uuid, "Brass Lantern", 45);

        record.specifications = vec![Specification {
            label: "Material".to_string(),
            value: "Brass".to_string(),
        }];

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |product| *product == uuid)
            .return_once(move |_| Ok(record));

        let response: ProductResponse = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, uuid.into_uuid(), "uuid mismatch");
        assert_eq!(response.category, "Home Decor", "category name mismatch");
        assert_eq!(
            response.specifications,
            vec![SpecificationBody {
                label: "Material".to_string(),
                value: "Brass".to_string(),
            }],
            "specifications mismatch"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{}", Uuid::now_v7()))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "expected 404");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_uuid_is_rejected_before_the_service() -> TestResult {
        let products = MockProductsService::new();

        let res = TestClient::get("http://example.com/products/not-a-uuid")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "expected 400");

        Ok(())
    }
}
