mod fs_local_assets;
mod gcs_blob_store;
mod legacy_media_repository_mongo;

pub use fs_local_assets::FsLocalAssets;
pub use gcs_blob_store::GcsBlobStore;
pub use legacy_media_repository_mongo::LegacyMediaRepositoryMongo;
