//! Views service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        views::{ANONYMOUS_DEVICE, errors::ViewsServiceError, repository::PgViewsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgViewsService {
    db: Db,
    repository: PgViewsRepository,
}

impl PgViewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgViewsRepository::new(),
        }
    }
}

#[async_trait]
impl ViewsService for PgViewsService {
    async fn record_view(&self, product: ProductUuid) -> Result<(), ViewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository
            .record_view(&mut tx, product, ANONYMOUS_DEVICE)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn clear_views(&self, product: ProductUuid) -> Result<u64, ViewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cleared = self.repository.clear_views(&mut tx, product).await?;

        tx.commit().await?;

        Ok(cleared)
    }

    async fn count_views(&self, product: ProductUuid) -> Result<u64, ViewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_views(&mut tx, product).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait ViewsService: Send + Sync {
    /// Records one anonymous view of a product.
    async fn record_view(&self, product: ProductUuid) -> Result<(), ViewsServiceError>;

    /// Deletes every view of a product, returning how many were removed.
    async fn clear_views(&self, product: ProductUuid) -> Result<u64, ViewsServiceError>;

    /// Number of recorded views of a product.
    async fn count_views(&self, product: ProductUuid) -> Result<u64, ViewsServiceError>;
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
    async fn record_and_clear_views() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Spices").await?;
        let product = create_product(&ctx, category.uuid, "Saffron", 12).await?;

        ctx.views.record_view(product.uuid).await?;
        ctx.views.record_view(product.uuid).await?;

        assert_eq!(ctx.views.count_views(product.uuid).await?, 2, "views should be counted");

        let cleared = ctx.views.clear_views(product.uuid).await?;

        assert_eq!(cleared, 2, "both views should be cleared");
        assert_eq!(ctx.views.count_views(product.uuid).await?, 0, "no views should remain");

        Ok(())
    }

    #[tokio::test]
    async fn record_view_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.views.record_view(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ViewsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn clear_views_without_views_is_zero() -> TestResult {
        let ctx = TestContext::new().await;

        let cleared = ctx.views.clear_views(ProductUuid::new()).await?;

        assert_eq!(cleared, 0, "nothing to clear");

        Ok(())
    }
}
