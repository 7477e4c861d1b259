//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::categories::{
        ALL_CATEGORIES,
        data::{CategoryUpdate, NewCategory},
        errors::CategoriesServiceError,
        records::{CategoryRecord, CategoryUuid},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn category_names(&self) -> Result<Vec<String>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let names = self.repository.list_category_names(&mut tx).await?;

        tx.commit().await?;

        Ok(std::iter::once(ALL_CATEGORIES.to_string())
            .chain(names)
            .collect())
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_category(&mut tx, category, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if !self.repository.lock_category(&mut tx, category).await? {
            return Err(CategoriesServiceError::NotFound);
        }

        let products = self
            .repository
            .count_category_products(&mut tx, category)
            .await?;

        if products > 0 {
            debug!(%category, products, "refusing to delete category with products");

            return Err(CategoriesServiceError::InUse);
        }

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn count_categories(&self) -> Result<u64, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories ordered by name, with product counts.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Category names for the storefront filter, led by the "All" sentinel.
    async fn category_names(&self) -> Result<Vec<String>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Creates a category. Names are unique.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Replaces the editable fields of a category.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category, refusing while any product still references it.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;

    /// Number of categories.
    async fn count_categories(&self) -> Result<u64, CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_category, create_product},
    };

    use super::*;

    #[tokio::test]
    async fn create_category_starts_with_no_products() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Perfumes".to_string(),
                description: Some("Oud and musk".to_string()),
                image: None,
                featured: vec!["Oud".to_string(), "Amber".to_string()],
            })
            .await?;

        assert_eq!(category.name, "Perfumes", "name mismatch");
        assert_eq!(category.featured, vec!["Oud", "Amber"], "featured mismatch");
        assert_eq!(category.product_count, 0, "new category should have no products");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        create_category(&ctx, "Papyrus").await?;

        let result = create_category(&ctx, "Papyrus").await;

        assert!(
            matches!(result, Err(CategoriesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_name_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = create_category(&ctx, "   ").await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_categories_is_sorted_and_counts_products() -> TestResult {
        let ctx = TestContext::new().await;

        let spices = create_category(&ctx, "Spices").await?;
        let amulets = create_category(&ctx, "Amulets").await?;

        create_product(&ctx, spices.uuid, "Saffron", 12).await?;
        create_product(&ctx, spices.uuid, "Cumin", 3).await?;

        let categories = ctx.categories.list_categories().await?;

        let summary: Vec<(&str, u64)> = categories
            .iter()
            .map(|category| (category.name.as_str(), category.product_count))
            .collect();

        assert_eq!(summary, vec![("Amulets", 0), ("Spices", 2)], "summary mismatch");
        assert_eq!(
            categories.first().map(|category| category.uuid),
            Some(amulets.uuid),
            "categories should be sorted by name"
        );

        Ok(())
    }

    #[tokio::test]
    async fn category_names_lead_with_all() -> TestResult {
        let ctx = TestContext::new().await;

        create_category(&ctx, "Spices").await?;
        create_category(&ctx, "Amulets").await?;

        let names = ctx.categories.category_names().await?;

        assert_eq!(names, vec!["All", "Amulets", "Spices"], "names mismatch");

        Ok(())
    }

    #[tokio::test]
    async fn get_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.get_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_category_replaces_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let category = create_category(&ctx, "Spices").await?;

        create_product(&ctx, category.uuid, "Saffron", 12).await?;

        let updated = ctx
            .categories
            .update_category(
                category.uuid,
                CategoryUpdate {
                    name: "Spices & Herbs".to_string(),
                    description: None,
                    image: Some("/uploads/spices.jpg".to_string()),
                    featured: vec!["Saffron".to_string()],
                },
            )
            .await?;

        assert_eq!(updated.name, "Spices & Herbs", "name should change");
        assert_eq!(updated.image.as_deref(), Some("/uploads/spices.jpg"), "image mismatch");
        assert_eq!(updated.product_count, 1, "product count should be reported");
        assert!(updated.updated_at >= category.updated_at, "updated_at should advance");

        Ok(())
    }

    #[tokio::test]
    async fn update_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .categories
            .update_category(
                CategoryUuid::new(),
                CategoryUpdate {
                    name: "Ghost".to_string(),
                    description: None,
                    image: None,
                    featured: Vec::new(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_category_with_products_returns_in_use() -> TestResult {
        let ctx = TestContext::new().await;

        let category = create_category(&ctx, "Spices").await?;

        create_product(&ctx, category.uuid, "Saffron", 12).await?;

        let result = ctx.categories.delete_category(category.uuid).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InUse)),
            "expected InUse, got {result:?}"
        );

        let still_there = ctx.categories.get_category(category.uuid).await?;

        assert_eq!(still_there.product_count, 1, "category should be untouched");

        Ok(())
    }

    #[tokio::test]
    async fn delete_empty_category_removes_it() -> TestResult {
        let ctx = TestContext::new().await;

        let category = create_category(&ctx, "Spices").await?;

        ctx.categories.delete_category(category.uuid).await?;

        let result = ctx.categories.get_category(category.uuid).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );
        assert_eq!(ctx.categories.count_categories().await?, 0, "count mismatch");

        Ok(())
    }

    #[tokio::test]
    async fn delete_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.delete_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
