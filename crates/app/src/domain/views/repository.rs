//! Views Repository

use sqlx::{Postgres, Transaction, query, query_scalar};
use uuid::Uuid;

use crate::{database::convert_column, domain::products::records::ProductUuid};

const RECORD_VIEW_SQL: &str = include_str!("sql/record_view.sql");
const CLEAR_VIEWS_SQL: &str = include_str!("sql/clear_views.sql");
const COUNT_VIEWS_SQL: &str = include_str!("sql/count_views.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgViewsRepository;

impl PgViewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn record_view(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        device_id: &str,
    ) -> Result<(), sqlx::Error> {
        query(RECORD_VIEW_SQL)
            .bind(Uuid::now_v7())
            .bind(product.into_uuid())
            .bind(device_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn clear_views(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_VIEWS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_views(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_VIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        convert_column("count", count)
    }
}
