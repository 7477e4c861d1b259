//! App Context

use std::{path::PathBuf, sync::Arc};

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    auth::{AdminPassword, AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        assets::{AssetsService, LocalAssetStore, StoreAssetsService},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        views::{PgViewsService, ViewsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] MigrateError),
}

/// Settings the services need beyond a database connection.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub admin_password: AdminPassword,

    /// Directory uploaded images are written to.
    pub upload_dir: PathBuf,

    /// Public URL prefix the upload directory is served under.
    pub upload_public_url: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub orders: Arc<dyn OrdersService>,
    pub views: Arc<dyn ViewsService>,
    pub auth: Arc<dyn AuthService>,
    pub assets: Arc<dyn AssetsService>,
}

impl AppContext {
    /// Build application context from a database URL, optionally applying pending migrations
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        settings: AppSettings,
        migrate: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if migrate {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_pool(pool, settings))
    }

    /// Build application context over an existing connection pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, settings: AppSettings) -> Self {
        let db = Db::new(pool);

        let store = LocalAssetStore::new(settings.upload_dir);

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            views: Arc::new(PgViewsService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db, settings.admin_password)),
            assets: Arc::new(StoreAssetsService::new(
                Arc::new(store),
                settings.upload_public_url,
            )),
        }
    }
}
