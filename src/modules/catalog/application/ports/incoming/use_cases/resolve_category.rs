use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::CatalogQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveCategoryError {
    #[error("Failed to resolve category: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for ResolveCategoryError {
    fn from(err: CatalogQueryError) -> Self {
        ResolveCategoryError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ResolveCategoryUseCase: Send + Sync {
    async fn execute(&self, raw: &str) -> Result<Option<Category>, ResolveCategoryError>;
}
