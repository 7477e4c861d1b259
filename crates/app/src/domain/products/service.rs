//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{NewProduct, ProductData, ProductFilter},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_related_products(
        &self,
        product: ProductUuid,
        category: CategoryUuid,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_related_products(&mut tx, product, category, limit)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository
            .create_product(&mut tx, product.uuid, &product.data)
            .await?;

        self.repository
            .replace_specifications(&mut tx, product.uuid, &product.data.specifications)
            .await?;

        let created = self.repository.get_product(&mut tx, product.uuid).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        data: ProductData,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .update_product(&mut tx, product, &data)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.repository
            .replace_specifications(&mut tx, product, &data.specifications)
            .await?;

        let updated = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn count_products(&self) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_products(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching a storefront filter.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves other products in the same category, newest first.
    async fn list_related_products(
        &self,
        product: ProductUuid,
        category: CategoryUuid,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product with its specifications.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product and its specifications.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's fields and specifications.
    async fn update_product(
        &self,
        product: ProductUuid,
        data: ProductData,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product. Its specifications and view records go with it.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Number of products.
    async fn count_products(&self) -> Result<u64, ProductsServiceError>;
}
