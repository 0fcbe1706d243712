use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::catalog::application::domain::entities::{EntityId, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub owner_id: EntityId,
    pub category_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductRepositoryError>;
}
