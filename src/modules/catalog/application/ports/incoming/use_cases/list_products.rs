use async_trait::async_trait;
use serde::Serialize;

use crate::modules::catalog::application::domain::entities::{Category, HydratedProduct};
use crate::modules::catalog::application::ports::outgoing::CatalogQueryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
    /// Category identifier or slug.
    pub category: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    /// The category the filter resolved to, if any.
    pub category: Option<Category>,
    pub products: Vec<HydratedProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListProductsError {
    #[error("Failed to list products: {0}")]
    QueryFailed(String),
}

impl From<CatalogQueryError> for ListProductsError {
    fn from(err: CatalogQueryError) -> Self {
        ListProductsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, query: ListProductsQuery) -> Result<ProductListing, ListProductsError>;
}
