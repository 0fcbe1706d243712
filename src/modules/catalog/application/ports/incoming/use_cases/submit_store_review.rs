use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::{EntityId, MAX_RATING, MIN_RATING};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQueryError, ReviewRepositoryError, UpsertOutcome,
};

//
// ──────────────────────────────────────────────────────────
// Submit Store Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStoreReviewCommand {
    store_owner_id: EntityId,
    reviewer_id: EntityId,
    rating: u8,
    review_text: String,
}

impl SubmitStoreReviewCommand {
    pub fn new(
        store_owner_id: EntityId,
        reviewer_id: EntityId,
        rating: i64,
        review_text: &str,
    ) -> Result<Self, SubmitStoreReviewError> {
        if store_owner_id == reviewer_id {
            return Err(SubmitStoreReviewError::OwnStore);
        }

        let rating = u8::try_from(rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or(SubmitStoreReviewError::InvalidRating)?;

        Ok(Self {
            store_owner_id,
            reviewer_id,
            rating,
            review_text: review_text.trim().to_string(),
        })
    }

    pub fn store_owner_id(&self) -> EntityId {
        self.store_owner_id
    }

    pub fn reviewer_id(&self) -> EntityId {
        self.reviewer_id
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitStoreReviewError {
    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("You cannot review your own store")]
    OwnStore,

    #[error("Store not found")]
    StoreNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReviewRepositoryError> for SubmitStoreReviewError {
    fn from(err: ReviewRepositoryError) -> Self {
        SubmitStoreReviewError::RepositoryError(err.to_string())
    }
}

impl From<CatalogQueryError> for SubmitStoreReviewError {
    fn from(err: CatalogQueryError) -> Self {
        SubmitStoreReviewError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitStoreReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitStoreReviewCommand,
    ) -> Result<UpsertOutcome, SubmitStoreReviewError>;
}
