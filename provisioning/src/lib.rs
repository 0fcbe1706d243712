use async_trait::async_trait;
use mongodb::Database;

mod m20250101_000001_create_indexes;
mod m20250101_000002_seed_categories;

#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    #[error("step {step} failed: {source}")]
    StepFailed {
        step: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
}

/// One idempotent deployment step. Running it twice leaves the database as
/// running it once did.
#[async_trait]
pub trait ProvisioningStep: Send + Sync {
    fn name(&self) -> &'static str;

    async fn up(&self, db: &Database) -> Result<(), mongodb::error::Error>;
}

pub struct Migrator;

impl Migrator {
    pub fn steps() -> Vec<Box<dyn ProvisioningStep>> {
        vec![
            Box::new(m20250101_000001_create_indexes::Migration),
            Box::new(m20250101_000002_seed_categories::Migration),
        ]
    }

    /// Runs every step in order and stops at the first failure.
    pub async fn up(db: &Database) -> Result<(), ProvisioningError> {
        for step in Self::steps() {
            tracing::info!(step = step.name(), "Applying provisioning step");
            step.up(db)
                .await
                .map_err(|source| ProvisioningError::StepFailed {
                    step: step.name(),
                    source,
                })?;
        }
        Ok(())
    }
}
