use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_backend::modules::media::adapter::outgoing::{
    FsLocalAssets, GcsBlobStore, LegacyMediaRepositoryMongo,
};
use marketplace_backend::modules::media::application::ports::incoming::use_cases::MigrateMediaUseCase;
use marketplace_backend::modules::media::application::services::MigrateMediaService;
use marketplace_backend::shared::config::{load_env_files, AppConfig};
use marketplace_backend::shared::mongo;

/// Copies legacy on-disk store and product images into the blob store and
/// rewrites the records to reference them.
///
/// Usage: `migrate_media [--dry-run]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");

    load_env_files();
    let config = AppConfig::from_env().context("invalid configuration")?;
    let db = mongo::connect(&config.mongo)
        .await
        .context("failed to connect to MongoDB")?;

    info!(
        bucket = %config.media.bucket_name,
        static_root = %config.media.static_root.display(),
        dry_run,
        "Starting media migration"
    );

    let service = MigrateMediaService::new(
        LegacyMediaRepositoryMongo::new(&db),
        FsLocalAssets::new(&config.media.static_root),
        GcsBlobStore::new(config.media.bucket_name.clone()),
    );

    let summary = service
        .execute(dry_run)
        .await
        .context("media migration aborted")?;

    info!("Stores processed: {}", summary.stores_processed);
    info!("Products processed: {}", summary.products_processed);
    if summary.skipped_missing > 0 || summary.failed > 0 {
        info!(
            "Skipped (file missing): {}, failed: {}",
            summary.skipped_missing, summary.failed
        );
    }
    if summary.dry_run {
        info!("Dry run: nothing was uploaded and no record was changed");
    }

    Ok(())
}
