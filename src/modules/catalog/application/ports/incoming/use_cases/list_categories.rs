use async_trait::async_trait;
use serde::Serialize;

use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::CatalogQueryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryWithCount {
    pub category: Category,
    pub product_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListCategoriesError {
    #[error("Failed to list categories: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for ListCategoriesError {
    fn from(err: CatalogQueryError) -> Self {
        ListCategoriesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryWithCount>, ListCategoriesError>;
}
