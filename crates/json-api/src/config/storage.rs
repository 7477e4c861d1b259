//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Uploaded asset settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory uploaded images are written to
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Public URL prefix the upload directory is served under
    #[arg(long, env = "UPLOAD_PUBLIC_URL", default_value = "/uploads")]
    pub upload_public_url: String,
}
