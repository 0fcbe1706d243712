use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{MediaUsage, MigrationCandidate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegacyMediaRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),
}

#[async_trait]
pub trait LegacyMediaRepository: Send + Sync {
    /// Records of the given usage that still carry a legacy path and no blob
    /// reference. Placeholder images are never candidates.
    async fn find_candidates(
        &self,
        usage: MediaUsage,
    ) -> Result<Vec<MigrationCandidate>, LegacyMediaRepositoryError>;

    /// Sets the blob reference and removes the legacy path in one write.
    async fn mark_migrated(
        &self,
        candidate: &MigrationCandidate,
        media_id: &str,
    ) -> Result<(), LegacyMediaRepositoryError>;
}
