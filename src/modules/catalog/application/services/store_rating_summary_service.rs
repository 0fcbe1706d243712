use async_trait::async_trait;

use crate::modules::catalog::application::{
    domain::{entities::EntityId, rating::RatingSummary},
    helpers::RatingAggregator,
    ports::incoming::use_cases::{StoreRatingSummaryError, StoreRatingSummaryUseCase},
};

#[derive(Clone)]
pub struct StoreRatingSummaryService {
    aggregator: RatingAggregator,
}

impl StoreRatingSummaryService {
    pub fn new(aggregator: RatingAggregator) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl StoreRatingSummaryUseCase for StoreRatingSummaryService {
    async fn execute(
        &self,
        store_owner_id: EntityId,
    ) -> Result<RatingSummary, StoreRatingSummaryError> {
        Ok(self.aggregator.summary(store_owner_id).await?)
    }
}
