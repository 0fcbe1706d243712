use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::HydratedProduct;
use crate::modules::catalog::application::ports::outgoing::CatalogQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProductError {
    #[error("Failed to fetch product: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for GetProductError {
    fn from(err: CatalogQueryError) -> Self {
        GetProductError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    /// `None` for unknown or malformed identifiers.
    async fn execute(&self, raw_id: &str) -> Result<Option<HydratedProduct>, GetProductError>;
}
