//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{convert_column, encode_column},
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{ProductData, ProductFilter, Specification},
            records::{ProductRecord, ProductUuid},
        },
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_RELATED_PRODUCTS_SQL: &str = include_str!("sql/list_related_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const LIST_SPECIFICATIONS_SQL: &str = include_str!("sql/list_specifications.sql");
const CREATE_SPECIFICATION_SQL: &str = include_str!("sql/create_specification.sql");
const DELETE_SPECIFICATIONS_SQL: &str = include_str!("sql/delete_specifications.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.category_name())
            .bind(filter.is_featured)
            .bind(filter.is_best_seller)
            .bind(filter.is_flash_sale)
            .bind(filter.sort.as_str())
            .bind(filter.limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_related_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        category: CategoryUuid,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_RELATED_PRODUCTS_SQL)
            .bind(product.into_uuid())
            .bind(category.into_uuid())
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        record.specifications = self.list_specifications(tx, product).await?;

        Ok(record)
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        data: &ProductData,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(data.category_uuid.into_uuid())
            .bind(&data.name)
            .bind(data.price)
            .bind(data.original_price)
            .bind(data.discount.map(i32::from))
            .bind(data.description.as_deref())
            .bind(data.full_description.as_deref())
            .bind(data.image.as_deref())
            .bind(data.rating)
            .bind(encode_column::<_, i32>(data.reviews)?)
            .bind(data.in_stock)
            .bind(encode_column::<_, i32>(data.quantity)?)
            .bind(encode_column::<_, i32>(data.sales)?)
            .bind(data.is_featured)
            .bind(data.is_best_seller)
            .bind(data.is_flash_sale)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        data: &ProductData,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(data.category_uuid.into_uuid())
            .bind(&data.name)
            .bind(data.price)
            .bind(data.original_price)
            .bind(data.discount.map(i32::from))
            .bind(data.description.as_deref())
            .bind(data.full_description.as_deref())
            .bind(data.image.as_deref())
            .bind(data.rating)
            .bind(encode_column::<_, i32>(data.reviews)?)
            .bind(data.in_stock)
            .bind(encode_column::<_, i32>(data.quantity)?)
            .bind(encode_column::<_, i32>(data.sales)?)
            .bind(data.is_featured)
            .bind(data.is_best_seller)
            .bind(data.is_flash_sale)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        convert_column("count", count)
    }

    pub(crate) async fn list_specifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<Specification>, sqlx::Error> {
        let rows: Vec<(String, String)> = query_as(LIST_SPECIFICATIONS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(label, value)| Specification { label, value })
            .collect())
    }

    /// Replace every specification row of `product` with `specifications`, in order.
    pub(crate) async fn replace_specifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        specifications: &[Specification],
    ) -> Result<(), sqlx::Error> {
        query(DELETE_SPECIFICATIONS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?;

        for (position, specification) in specifications.iter().enumerate() {
            query(CREATE_SPECIFICATION_SQL)
                .bind(Uuid::now_v7())
                .bind(product.into_uuid())
                .bind(encode_column::<_, i32>(position)?)
                .bind(&specification.label)
                .bind(&specification.value)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount = row
            .try_get::<Option<i32>, _>("discount")?
            .map(|discount| convert_column("discount", discount))
            .transpose()?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            category_name: row.try_get("category_name")?,
            name: row.try_get("name")?,
            price: row.try_get::<Decimal, _>("price")?,
            original_price: row.try_get("original_price")?,
            discount,
            description: row.try_get("description")?,
            full_description: row.try_get("full_description")?,
            image: row.try_get("image")?,
            rating: row.try_get("rating")?,
            reviews: convert_column("reviews", row.try_get::<i32, _>("reviews")?)?,
            in_stock: row.try_get("in_stock")?,
            quantity: convert_column("quantity", row.try_get::<i32, _>("quantity")?)?,
            sales: convert_column("sales", row.try_get::<i32, _>("sales")?)?,
            is_featured: row.try_get("is_featured")?,
            is_best_seller: row.try_get("is_best_seller")?,
            is_flash_sale: row.try_get("is_flash_sale")?,
            specifications: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
