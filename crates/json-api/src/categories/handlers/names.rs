//! Category Names Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{categories::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryNamesResponse {
    /// `"All"` followed by every category name in ascending order
    pub names: Vec<String>,
}

/// Category Names Handler
///
/// Options for the storefront category filter.
#[endpoint(tags("categories"), summary = "List Category Names")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<CategoryNamesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let names = state
        .app
        .categories
        .category_names()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoryNamesResponse { names }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::categories::MockCategoriesService;

    use crate::test_helpers::{service, with_categories};

    use super::*;

    #[tokio::test]
    async fn names_are_returned_as_given() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_category_names().once().return_once(|| {
            Ok(vec![
                "All".to_string(),
                "Home Decor".to_string(),
                "Perfumes".to_string(),
            ])
        });

        let response: CategoryNamesResponse =
            TestClient::get("http://example.com/categories/names")
                .send(&service(
                    with_categories(categories),
                    Router::with_path("categories/names").get(handler),
                ))
                .await
                .take_json()
                .await?;

        assert_eq!(
            response.names,
            vec!["All", "Home Decor", "Perfumes"],
            "names mismatch"
        );

        Ok(())
    }
}
