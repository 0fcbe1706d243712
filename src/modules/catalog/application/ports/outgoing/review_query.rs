use async_trait::async_trait;
use std::collections::HashMap;

use crate::modules::catalog::application::domain::{
    entities::{EntityId, StoreReview},
    rating::RatingStats,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Unrounded mean rating from a grouped aggregation; `None` when the store
    /// has no reviews.
    async fn average_rating(&self, store_owner_id: EntityId)
        -> Result<Option<f64>, ReviewQueryError>;

    async fn count_for_store(&self, store_owner_id: EntityId) -> Result<u64, ReviewQueryError>;

    /// Newest first.
    async fn list_for_store(
        &self,
        store_owner_id: EntityId,
    ) -> Result<Vec<StoreReview>, ReviewQueryError>;

    /// Average and count for every listed store from one grouped aggregation.
    /// Stores without reviews are absent.
    async fn rating_stats_by_store(
        &self,
        store_owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, RatingStats>, ReviewQueryError>;
}
