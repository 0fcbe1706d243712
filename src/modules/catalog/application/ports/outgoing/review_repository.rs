use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::catalog::application::domain::entities::EntityId;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewUpsert {
    pub store_owner_id: EntityId,
    pub reviewer_id: EntityId,
    pub rating: u8,
    pub review_text: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewRepositoryError {
    /// The (store owner, reviewer) unique index rejected an insert.
    #[error("Review for this store and reviewer already exists")]
    DuplicateReview,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts or overwrites the review keyed by (store owner, reviewer).
    async fn upsert(&self, review: &ReviewUpsert) -> Result<UpsertOutcome, ReviewRepositoryError>;

    /// Overwrites an existing review in place. Used after losing an insert race.
    async fn update_existing(&self, review: &ReviewUpsert) -> Result<(), ReviewRepositoryError>;
}
