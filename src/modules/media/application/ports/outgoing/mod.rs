mod blob_store;
mod legacy_media_repository;
mod local_asset_source;

pub use blob_store::{BlobObject, BlobStore, BlobStoreError};
pub use legacy_media_repository::{LegacyMediaRepository, LegacyMediaRepositoryError};
pub use local_asset_source::{LocalAssetError, LocalAssetSource};
