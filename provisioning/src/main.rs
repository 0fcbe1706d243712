use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_backend::shared::config::{load_env_files, AppConfig};
use marketplace_backend::shared::mongo;
use provisioning::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();
    let config = AppConfig::from_env().context("invalid configuration")?;
    let db = mongo::connect(&config.mongo)
        .await
        .context("failed to connect to MongoDB")?;

    Migrator::up(&db).await.context("provisioning aborted")?;

    tracing::info!("Provisioning complete");
    Ok(())
}
