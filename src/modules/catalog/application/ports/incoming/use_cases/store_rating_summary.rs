use async_trait::async_trait;

use crate::modules::catalog::application::domain::{entities::EntityId, rating::RatingSummary};
use crate::modules::catalog::application::ports::outgoing::ReviewQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreRatingSummaryError {
    #[error("Failed to aggregate ratings: {0}")]
    QueryFailed(String),
}

impl From<ReviewQueryError> for StoreRatingSummaryError {
    fn from(err: ReviewQueryError) -> Self {
        StoreRatingSummaryError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait StoreRatingSummaryUseCase: Send + Sync {
    async fn execute(&self, store_owner_id: EntityId)
        -> Result<RatingSummary, StoreRatingSummaryError>;
}
