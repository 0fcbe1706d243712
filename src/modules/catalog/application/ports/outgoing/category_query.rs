use async_trait::async_trait;

use super::CatalogQueryError;
use crate::modules::catalog::application::domain::entities::{Category, EntityId};

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, CatalogQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogQueryError>;

    /// One round-trip for the whole set.
    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Category>, CatalogQueryError>;

    /// All categories sorted by name ascending.
    async fn list_all(&self) -> Result<Vec<Category>, CatalogQueryError>;
}
