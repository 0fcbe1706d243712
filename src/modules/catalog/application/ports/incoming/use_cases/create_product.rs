use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::{EntityId, Product};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQueryError, ProductRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Create Product Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductCommand {
    seller_id: EntityId,
    title: String,
    price: f64,
    quantity: u32,
    description: String,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProductCommandError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Price must be greater than 0")]
    InvalidPrice,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity,
}

impl CreateProductCommand {
    /// `quantity` defaults to 1 when absent.
    pub fn new(
        seller_id: EntityId,
        title: &str,
        price: f64,
        quantity: Option<i64>,
        description: &str,
        category: Option<&str>,
    ) -> Result<Self, CreateProductCommandError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CreateProductCommandError::EmptyTitle);
        }

        if !price.is_finite() || price <= 0.0 {
            return Err(CreateProductCommandError::InvalidPrice);
        }

        let quantity = u32::try_from(quantity.unwrap_or(1))
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CreateProductCommandError::InvalidQuantity)?;

        Ok(Self {
            seller_id,
            title: title.to_string(),
            price,
            quantity,
            description: description.trim().to_string(),
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        })
    }

    pub fn seller_id(&self) -> EntityId {
        self.seller_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw category identifier or slug.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProductError {
    #[error("Seller not found")]
    SellerNotFound,

    #[error("Only sellers can post products")]
    NotASeller,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CatalogQueryError> for CreateProductError {
    fn from(err: CatalogQueryError) -> Self {
        CreateProductError::QueryFailed(err.to_string())
    }
}

impl From<ProductRepositoryError> for CreateProductError {
    fn from(err: ProductRepositoryError) -> Self {
        CreateProductError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError>;
}
