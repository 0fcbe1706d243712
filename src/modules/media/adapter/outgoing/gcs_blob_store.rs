use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::media::application::ports::outgoing::{BlobObject, BlobStore, BlobStoreError};

fn map_upload_error(msg: &str) -> BlobStoreError {
    let m = msg.to_lowercase();

    let rejected = m.contains("permission")
        || m.contains("forbidden")
        || m.contains("403")
        || (m.contains("bucket") && (m.contains("not found") || m.contains("404")));

    if rejected {
        BlobStoreError::UploadFailed(msg.to_string())
    } else {
        BlobStoreError::Unavailable(msg.to_string())
    }
}

/// Internal seam so the adapter can be tested without google-cloud-storage
/// types.
#[async_trait]
trait GcsUploader: Send + Sync {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        metadata: HashMap<String, String>,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

/// Uploads into one bucket. The object key doubles as the media reference.
#[derive(Clone)]
pub struct GcsBlobStore {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsUploader>>>,
}

impl GcsBlobStore {
    /// The client is built lazily on the first upload, so a dry run never
    /// needs credentials.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsUploader, String> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsUploader::new().await?;
                Ok::<_, String>(Box::new(real_client) as Box<dyn GcsUploader>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_uploader(bucket: &str, uploader: Box<dyn GcsUploader>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(uploader);
        Self {
            bucket: bucket.to_string(),
            client: Arc::new(once),
        }
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn put(&self, object: BlobObject) -> Result<String, BlobStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(BlobStoreError::Unavailable)?;

        let metadata: HashMap<String, String> = object.metadata.into_iter().collect();

        client
            .upload(
                &self.bucket,
                &object.key,
                &object.content_type,
                metadata,
                object.bytes,
            )
            .await
            .map_err(|e| map_upload_error(&e))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %object.key,
            file = %object.file_name,
            "Uploaded object"
        );
        Ok(object.key)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsUploader {
    client: google_cloud_storage::client::Client,
}

impl RealGcsUploader {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS client config: {:?}", e);
                e.to_string()
            })?;

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsUploader for RealGcsUploader {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        metadata: HashMap<String, String>,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::{
            upload::{UploadObjectRequest, UploadType},
            Object,
        };

        let object = Object {
            name: object_name.to_string(),
            content_type: Some(content_type.to_string()),
            metadata: Some(metadata),
            ..Default::default()
        };

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                bytes,
                &UploadType::Multipart(Box::new(object)),
            )
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
