use async_trait::async_trait;

use super::CatalogQueryError;
use crate::modules::catalog::application::domain::entities::{EntityId, User};

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, CatalogQueryError>;

    /// One round-trip for the whole set. Unknown ids are simply absent from
    /// the result; order is unspecified.
    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<User>, CatalogQueryError>;

    async fn list_sellers(&self) -> Result<Vec<User>, CatalogQueryError>;
}
