//! Souk JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use souk_app::{
    auth::AdminPassword,
    context::{AppContext, AppSettings},
};

use crate::{
    auth::SESSION_COOKIE,
    config::{ServerConfig, storage::StorageConfig},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod categories;
mod config;
mod dashboard;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod products;
mod responses;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod uploads;
mod views;

/// Route serving stored uploads, when they are published under a local path.
fn uploads_router(storage: &StorageConfig) -> Option<Router> {
    let prefix = storage.upload_public_url.strip_prefix('/')?.trim_end_matches('/');

    if prefix.is_empty() {
        return None;
    }

    Some(
        Router::with_path(format!("{prefix}/{{**path}}"))
            .get(StaticDir::new(vec![storage.upload_dir.clone()]).auto_list(false)),
    )
}

/// Souk JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let settings = AppSettings {
        admin_password: AdminPassword::new(&config.auth.admin_password),
        upload_dir: config.storage.upload_dir.clone(),
        upload_public_url: config.storage.upload_public_url.clone(),
    };

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        settings,
        config.database.migrate_on_start,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::new(app, config.auth.cookie_secure)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    if let Some(uploads) = uploads_router(&config.storage) {
        router = router.push(uploads);
    }

    let doc = OpenApi::new("Souk API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "admin_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
