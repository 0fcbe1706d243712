use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use crate::modules::media::application::ports::outgoing::{LocalAssetError, LocalAssetSource};

/// Files under the static root on the local disk.
#[derive(Debug, Clone)]
pub struct FsLocalAssets {
    root: PathBuf,
}

impl FsLocalAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Paths that would leave the root resolve to nothing.
    fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl LocalAssetSource for FsLocalAssets {
    async fn is_file(&self, relative_path: &str) -> bool {
        match self.resolve(relative_path) {
            Some(path) => tokio::fs::metadata(path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false),
            None => false,
        }
    }

    async fn is_dir(&self, relative_path: &str) -> bool {
        match self.resolve(relative_path) {
            Some(path) => tokio::fs::metadata(path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false),
            None => false,
        }
    }

    async fn read(&self, relative_path: &str) -> Result<Vec<u8>, LocalAssetError> {
        let path = self
            .resolve(relative_path)
            .ok_or_else(|| LocalAssetError::ReadFailed {
                path: relative_path.to_string(),
                message: "path leaves the static root".to_string(),
            })?;

        tokio::fs::read(&path)
            .await
            .map_err(|e| LocalAssetError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}
