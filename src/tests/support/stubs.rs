use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::EntityId;
use crate::modules::catalog::application::domain::rating::RatingSummary;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetStorePageError, GetStorePageUseCase, StorePage, StoreRatingSummaryError,
    StoreRatingSummaryUseCase,
};

#[derive(Clone)]
pub struct StubStoreRatingSummaryUseCase {
    result: Result<RatingSummary, StoreRatingSummaryError>,
}

impl StubStoreRatingSummaryUseCase {
    pub fn returning(summary: RatingSummary) -> Self {
        Self {
            result: Ok(summary),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(StoreRatingSummaryError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl StoreRatingSummaryUseCase for StubStoreRatingSummaryUseCase {
    async fn execute(
        &self,
        _store_owner_id: EntityId,
    ) -> Result<RatingSummary, StoreRatingSummaryError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetStorePageUseCase {
    error: GetStorePageError,
}

impl StubGetStorePageUseCase {
    pub fn failing_with(error: GetStorePageError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl GetStorePageUseCase for StubGetStorePageUseCase {
    async fn execute(
        &self,
        _raw_owner_id: &str,
        _viewer_id: Option<EntityId>,
    ) -> Result<StorePage, GetStorePageError> {
        Err(self.error.clone())
    }
}
