//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ListenConfig,
    storage::StorageConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

pub(crate) use observability::LogFormat;

/// Souk JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "souk-json", about = "Souk JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Dashboard authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Uploaded asset settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_fill_everything_but_secrets() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "souk-json",
            "--database-url",
            "postgres://localhost/souk",
            "--admin-password",
            "hunter2",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698", "default bind address");
        assert!(config.auth.cookie_secure, "cookies should be secure by default");
        assert_eq!(
            config.storage.upload_public_url, "/uploads",
            "default public upload prefix"
        );
        assert_eq!(
            config.observability.slow_request_threshold_ms, 1_000,
            "default slow request threshold"
        );

        Ok(())
    }

    #[test]
    fn admin_password_is_required() {
        let result =
            ServerConfig::try_parse_from(["souk-json", "--database-url", "postgres://x/y"]);

        assert!(result.is_err(), "missing admin password should fail to parse");
    }
}
