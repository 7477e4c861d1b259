//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::convert_column,
    domain::categories::{
        data::{CategoryUpdate, NewCategory},
        records::{CategoryRecord, CategoryUuid},
    },
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const LIST_CATEGORY_NAMES_SQL: &str = include_str!("sql/list_category_names.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const UPDATE_CATEGORY_SQL: &str = include_str!("sql/update_category.sql");
const LOCK_CATEGORY_SQL: &str = include_str!("sql/lock_category.sql");
const COUNT_CATEGORY_PRODUCTS_SQL: &str = include_str!("sql/count_category_products.sql");
const DELETE_CATEGORY_SQL: &str = include_str!("sql/delete_category.sql");
const COUNT_CATEGORIES_SQL: &str = include_str!("sql/count_categories.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_category_names(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_CATEGORY_NAMES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &NewCategory,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(category.uuid.into_uuid())
            .bind(&category.name)
            .bind(category.description.as_deref())
            .bind(category.image.as_deref())
            .bind(&category.featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        update: &CategoryUpdate,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(UPDATE_CATEGORY_SQL)
            .bind(category.into_uuid())
            .bind(&update.name)
            .bind(update.description.as_deref())
            .bind(update.image.as_deref())
            .bind(&update.featured)
            .fetch_one(&mut **tx)
            .await
    }

    /// Lock the category row for the rest of the transaction.
    ///
    /// Returns `false` when the category does not exist.
    pub(crate) async fn lock_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<bool, sqlx::Error> {
        let locked = query_scalar::<Postgres, Uuid>(LOCK_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(locked.is_some())
    }

    pub(crate) async fn count_category_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_CATEGORY_PRODUCTS_SQL)
            .bind(category.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        convert_column("count", count)
    }

    pub(crate) async fn delete_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CATEGORY_SQL)
            .bind(category.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_CATEGORIES_SQL)
            .fetch_one(&mut **tx)
            .await?;

        convert_column("count", count)
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            featured: row.try_get("featured")?,
            product_count: convert_column("product_count", row.try_get::<i64, _>("product_count")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
