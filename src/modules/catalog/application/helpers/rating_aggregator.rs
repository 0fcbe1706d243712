use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::catalog::application::domain::entities::EntityId;
use crate::modules::catalog::application::domain::rating::{RatingStats, RatingSummary};
use crate::modules::catalog::application::ports::outgoing::{ReviewQuery, ReviewQueryError};

#[derive(Clone)]
pub struct RatingAggregator {
    reviews: Arc<dyn ReviewQuery + Send + Sync>,
}

impl RatingAggregator {
    pub fn new(reviews: Arc<dyn ReviewQuery + Send + Sync>) -> Self {
        Self { reviews }
    }

    /// Mean from the grouped aggregation; count from a separate total count.
    pub async fn summary(&self, store_owner_id: EntityId) -> Result<RatingSummary, ReviewQueryError> {
        let average = self.reviews.average_rating(store_owner_id).await?;
        let count = self.reviews.count_for_store(store_owner_id).await?;

        Ok(RatingSummary::from_stats(RatingStats { average, count }))
    }

    /// Summaries for many stores from one aggregation. Stores without reviews
    /// get an empty summary.
    pub async fn summaries(
        &self,
        store_owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, RatingSummary>, ReviewQueryError> {
        if store_owner_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let stats = self.reviews.rating_stats_by_store(store_owner_ids).await?;

        Ok(store_owner_ids
            .iter()
            .map(|id| {
                let summary = stats
                    .get(id)
                    .copied()
                    .map(RatingSummary::from_stats)
                    .unwrap_or_else(RatingSummary::empty);
                (*id, summary)
            })
            .collect())
    }
}
