//! Asset storage backends.

use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use mockall::automock;
use tokio::{fs, io::AsyncWriteExt};

/// Write-once blob storage keyed by file name.
#[automock]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` under `name`. Existing assets are never overwritten.
    async fn put(&self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Stores assets as files in a local directory, typically one a web server or CDN
/// serves directly.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    /// Use `root` as the asset directory. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Asset directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid asset name {name:?}"),
            ));
        }

        fs::create_dir_all(&self.root).await?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.root.join(name))
            .await?;

        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(())
    }
}
