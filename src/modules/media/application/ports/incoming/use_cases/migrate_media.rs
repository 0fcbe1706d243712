use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MigrationSummary;
use crate::modules::media::application::ports::outgoing::LegacyMediaRepositoryError;

/// Only failures that stop the whole batch. Per-record problems are logged and
/// counted in the summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrateMediaError {
    #[error("Failed to select candidates: {0}")]
    CandidateQueryFailed(String),
}

impl From<LegacyMediaRepositoryError> for MigrateMediaError {
    fn from(err: LegacyMediaRepositoryError) -> Self {
        MigrateMediaError::CandidateQueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait MigrateMediaUseCase: Send + Sync {
    async fn execute(&self, dry_run: bool) -> Result<MigrationSummary, MigrateMediaError>;
}
