use async_trait::async_trait;
use serde::Serialize;

use crate::modules::catalog::application::domain::{
    entities::{EntityId, GeoPoint, MediaRef},
    rating::RatingSummary,
};
use crate::modules::catalog::application::ports::outgoing::{CatalogQueryError, ReviewQueryError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreDirectoryEntry {
    pub owner_id: EntityId,
    /// Store name, or the username when the store has none.
    pub name: String,
    pub city: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub image: MediaRef,
    pub rating: RatingSummary,
    pub product_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListStoresError {
    #[error("Failed to list stores: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for ListStoresError {
    fn from(err: CatalogQueryError) -> Self {
        ListStoresError::QueryFailed(err.to_string())
    }
}

impl From<ReviewQueryError> for ListStoresError {
    fn from(err: ReviewQueryError) -> Self {
        ListStoresError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListStoresUseCase: Send + Sync {
    /// `only_mapped` keeps sellers that have both coordinates.
    async fn execute(&self, only_mapped: bool)
        -> Result<Vec<StoreDirectoryEntry>, ListStoresError>;
}
