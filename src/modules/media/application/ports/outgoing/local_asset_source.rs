use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalAssetError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
}

/// Files under the static root, addressed by relative path.
#[async_trait]
pub trait LocalAssetSource: Send + Sync {
    async fn is_file(&self, relative_path: &str) -> bool;

    async fn is_dir(&self, relative_path: &str) -> bool;

    async fn read(&self, relative_path: &str) -> Result<Vec<u8>, LocalAssetError>;
}
