use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::modules::media::application::domain::entities::{
    MediaUsage, MigrationCandidate, MigrationOutcome, MigrationSummary,
};
use crate::modules::media::application::domain::policies::migration_policy::{
    candidate_paths, content_type_for, file_name, object_key, UPLOADS_DIR,
};
use crate::modules::media::application::ports::incoming::use_cases::{
    MigrateMediaError, MigrateMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::{
    BlobObject, BlobStore, LegacyMediaRepository, LocalAssetSource,
};

/// Stores are migrated before products.
const MIGRATION_ORDER: [MediaUsage; 2] = [MediaUsage::StoreAvatar, MediaUsage::ProductImage];

pub struct MigrateMediaService<R, A, B>
where
    R: LegacyMediaRepository,
    A: LocalAssetSource,
    B: BlobStore,
{
    repository: R,
    assets: A,
    blobs: B,
}

impl<R, A, B> MigrateMediaService<R, A, B>
where
    R: LegacyMediaRepository,
    A: LocalAssetSource,
    B: BlobStore,
{
    pub fn new(repository: R, assets: A, blobs: B) -> Self {
        Self {
            repository,
            assets,
            blobs,
        }
    }

    async fn locate(&self, legacy_path: &str) -> Option<String> {
        for candidate in candidate_paths(legacy_path) {
            if self.assets.is_file(&candidate).await {
                return Some(candidate);
            }
        }
        None
    }

    async fn migrate_one(&self, candidate: &MigrationCandidate, dry_run: bool) -> MigrationOutcome {
        let usage = candidate.usage;
        let record_id = candidate.record_id.as_str();

        let Some(relative_path) = self.locate(&candidate.legacy_path).await else {
            warn!(
                %usage,
                record_id,
                legacy_path = %candidate.legacy_path,
                "Skipping record: local file missing"
            );
            return MigrationOutcome::MissingFile;
        };

        if dry_run {
            info!(%usage, record_id, path = %relative_path, "Dry run: would migrate");
            return MigrationOutcome::WouldMigrate;
        }

        let bytes = match self.assets.read(&relative_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(%usage, record_id, error = %e, "Skipping record: file unreadable");
                return MigrationOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let name = file_name(&relative_path);
        let mut metadata = BTreeMap::new();
        metadata.insert("usage".to_string(), usage.as_str().to_string());
        if let Some(owner_id) = candidate.owner_id.as_ref() {
            metadata.insert("owner_id".to_string(), owner_id.clone());
        }

        let object = BlobObject {
            key: object_key(usage, Uuid::new_v4(), &name),
            content_type: content_type_for(&name).to_string(),
            file_name: name,
            metadata,
            bytes,
        };

        let media_id = match self.blobs.put(object).await {
            Ok(media_id) => media_id,
            Err(e) => {
                error!(%usage, record_id, error = %e, "Skipping record: upload failed");
                return MigrationOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        if let Err(e) = self.repository.mark_migrated(candidate, &media_id).await {
            // the legacy path is still set, so the next run retries this record
            error!(
                %usage,
                record_id,
                media_id = %media_id,
                error = %e,
                "Uploaded blob but failed to update record; blob is orphaned"
            );
            return MigrationOutcome::Failed {
                reason: e.to_string(),
            };
        }

        info!(%usage, record_id, media_id = %media_id, path = %relative_path, "Migrated");
        MigrationOutcome::Migrated { media_id }
    }
}

#[async_trait]
impl<R, A, B> MigrateMediaUseCase for MigrateMediaService<R, A, B>
where
    R: LegacyMediaRepository + Send + Sync,
    A: LocalAssetSource + Send + Sync,
    B: BlobStore + Send + Sync,
{
    async fn execute(&self, dry_run: bool) -> Result<MigrationSummary, MigrateMediaError> {
        if !self.assets.is_dir(UPLOADS_DIR).await {
            warn!("Uploads directory does not exist under the static root. Continuing anyway");
        }

        let mut summary = MigrationSummary::new(dry_run);

        for usage in MIGRATION_ORDER {
            let candidates = self.repository.find_candidates(usage).await?;
            info!(%usage, count = candidates.len(), "Selected migration candidates");

            for candidate in &candidates {
                let outcome = self.migrate_one(candidate, dry_run).await;
                summary.record(usage, &outcome);
            }
        }

        info!(
            stores_processed = summary.stores_processed,
            products_processed = summary.products_processed,
            skipped_missing = summary.skipped_missing,
            failed = summary.failed,
            dry_run,
            "Media migration finished"
        );

        Ok(summary)
    }
}
