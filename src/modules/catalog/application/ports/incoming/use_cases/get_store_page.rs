use async_trait::async_trait;
use serde::Serialize;

use crate::modules::catalog::application::domain::{
    entities::{EntityId, HydratedProduct, HydratedReview, StoreReview, User},
    rating::RatingSummary,
};
use crate::modules::catalog::application::ports::outgoing::{CatalogQueryError, ReviewQueryError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePage {
    pub owner: User,
    /// Newest first.
    pub products: Vec<HydratedProduct>,
    /// Newest first.
    pub reviews: Vec<HydratedReview>,
    pub rating: RatingSummary,
    /// The viewer's own review of this store, when the viewer is not the owner.
    pub viewer_review: Option<StoreReview>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetStorePageError {
    #[error("Store not found")]
    StoreNotFound,

    #[error("User is not a store owner")]
    NotASeller,

    #[error("Failed to load store page: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for GetStorePageError {
    fn from(err: CatalogQueryError) -> Self {
        GetStorePageError::QueryFailed(err.to_string())
    }
}

impl From<ReviewQueryError> for GetStorePageError {
    fn from(err: ReviewQueryError) -> Self {
        GetStorePageError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetStorePageUseCase: Send + Sync {
    async fn execute(
        &self,
        raw_owner_id: &str,
        viewer_id: Option<EntityId>,
    ) -> Result<StorePage, GetStorePageError>;
}
