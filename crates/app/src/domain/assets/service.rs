//! Assets service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::assets::{
    ALLOWED_IMAGE_TYPES, DEFAULT_IMAGE_EXTENSION, MAX_IMAGE_BYTES, errors::AssetsServiceError,
    store::AssetStore,
};

/// An uploaded file as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    /// Client-side file name, used only for its extension.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A stored asset and where it can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub name: String,
    pub url: String,
}

/// Validates uploads and hands them to an [`AssetStore`].
#[derive(Clone)]
pub struct StoreAssetsService {
    store: Arc<dyn AssetStore>,
    public_base_url: String,
}

impl StoreAssetsService {
    #[must_use]
    pub fn new(store: Arc<dyn AssetStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into(),
        }
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{name}", self.public_base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for StoreAssetsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAssetsService")
            .field("public_base_url", &self.public_base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AssetsService for StoreAssetsService {
    async fn upload_image(&self, asset: NewAsset) -> Result<StoredAsset, AssetsServiceError> {
        validate_image(&asset)?;

        let name = format!(
            "{}.{}",
            Uuid::now_v7().simple(),
            image_extension(asset.file_name.as_deref())
        );

        if let Err(error) = self.store.put(&name, &asset.bytes).await {
            warn!(%name, "failed to store upload: {error}");

            return Err(error.into());
        }

        info!(%name, bytes = asset.bytes.len(), "stored upload");

        Ok(StoredAsset {
            url: self.public_url(&name),
            name,
        })
    }
}

#[automock]
#[async_trait]
pub trait AssetsService: Send + Sync {
    /// Validates and stores an image upload.
    async fn upload_image(&self, asset: NewAsset) -> Result<StoredAsset, AssetsServiceError>;
}

/// Check content type, then size.
///
/// # Errors
///
/// Returns [`AssetsServiceError::InvalidType`] or [`AssetsServiceError::TooLarge`].
pub fn validate_image(asset: &NewAsset) -> Result<(), AssetsServiceError> {
    let allowed = asset
        .content_type
        .as_deref()
        .is_some_and(|content_type| ALLOWED_IMAGE_TYPES.contains(&content_type));

    if !allowed {
        return Err(AssetsServiceError::InvalidType(asset.content_type.clone()));
    }

    if asset.bytes.len() > MAX_IMAGE_BYTES {
        return Err(AssetsServiceError::TooLarge(asset.bytes.len()));
    }

    Ok(())
}

/// Lower-cased extension of `file_name`, or the default when missing or unusable.
#[must_use]
pub fn image_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .filter(|extension| {
            !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string())
}

#[cfg(test)]
mod tests {
    use std::io;

    use testresult::TestResult;

    use crate::domain::assets::store::{LocalAssetStore, MockAssetStore};

    use super::*;

    fn png(size: usize) -> NewAsset {
        NewAsset {
            file_name: Some("Scarab.PNG".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn extension_is_lower_cased() {
        assert_eq!(image_extension(Some("photo.JPEG")), "jpeg", "extension mismatch");
        assert_eq!(image_extension(Some("a.b.webp")), "webp", "last segment wins");
    }

    #[test]
    fn missing_or_odd_extension_defaults_to_jpg() {
        assert_eq!(image_extension(None), "jpg", "no name");
        assert_eq!(image_extension(Some("photo")), "jpg", "no extension");
        assert_eq!(image_extension(Some("photo.")), "jpg", "empty extension");
        assert_eq!(image_extension(Some("photo.p/ng")), "jpg", "path characters");
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_image(&png(MAX_IMAGE_BYTES)).is_ok(), "exactly 5MB is allowed");
        assert!(
            matches!(
                validate_image(&png(MAX_IMAGE_BYTES + 1)),
                Err(AssetsServiceError::TooLarge(_))
            ),
            "one byte over is rejected"
        );
    }

    #[test]
    fn type_is_checked_before_size() {
        let asset = NewAsset {
            content_type: Some("application/pdf".to_string()),
            ..png(MAX_IMAGE_BYTES + 1)
        };

        assert!(
            matches!(validate_image(&asset), Err(AssetsServiceError::InvalidType(_))),
            "type should be reported first"
        );
    }

    #[test]
    fn missing_type_is_invalid() {
        let asset = NewAsset {
            content_type: None,
            ..png(1)
        };

        assert!(
            matches!(validate_image(&asset), Err(AssetsServiceError::InvalidType(None))),
            "missing type should be rejected"
        );
    }

    #[tokio::test]
    async fn upload_stores_under_generated_name() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = StoreAssetsService::new(
            Arc::new(LocalAssetStore::new(dir.path())),
            "https://cdn.example.com/uploads/",
        );

        let stored = service.upload_image(png(16)).await?;

        assert!(stored.name.ends_with(".png"), "name should keep the extension");
        assert_eq!(
            stored.url,
            format!("https://cdn.example.com/uploads/{}", stored.name),
            "url mismatch"
        );
        assert_eq!(
            tokio::fs::read(dir.path().join(&stored.name)).await?.len(),
            16,
            "file should be written"
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejected_upload_never_reaches_the_store() {
        let mut store = MockAssetStore::new();

        store.expect_put().never();

        let service = StoreAssetsService::new(Arc::new(store), "/uploads");

        let result = service.upload_image(png(MAX_IMAGE_BYTES + 1)).await;

        assert!(
            matches!(result, Err(AssetsServiceError::TooLarge(_))),
            "expected TooLarge, got {result:?}"
        );
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let mut store = MockAssetStore::new();

        store
            .expect_put()
            .once()
            .returning(|_, _| Err(io::Error::other("disk full")));

        let service = StoreAssetsService::new(Arc::new(store), "/uploads");

        let result = service.upload_image(png(1)).await;

        assert!(
            matches!(result, Err(AssetsServiceError::Storage(_))),
            "expected Storage, got {result:?}"
        );
    }
}
