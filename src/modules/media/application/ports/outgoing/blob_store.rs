use async_trait::async_trait;
use std::collections::BTreeMap;

/// One object to upload, fully described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobObject {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub metadata: BTreeMap<String, String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Blob store unavailable: {0}")]
    Unavailable(String),

    #[error("Upload rejected: {0}")]
    UploadFailed(String),
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads the object and returns the opaque reference to store on the
    /// owning document.
    async fn put(&self, object: BlobObject) -> Result<String, BlobStoreError>;
}
