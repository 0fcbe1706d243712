use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::{
    domain::entities::{EntityId, HydratedProduct},
    helpers::Hydrator,
    ports::incoming::use_cases::{GetProductError, GetProductUseCase},
    ports::outgoing::ProductQuery,
};

#[derive(Clone)]
pub struct GetProductService {
    products: Arc<dyn ProductQuery + Send + Sync>,
    hydrator: Hydrator,
}

impl GetProductService {
    pub fn new(products: Arc<dyn ProductQuery + Send + Sync>, hydrator: Hydrator) -> Self {
        Self { products, hydrator }
    }
}

#[async_trait]
impl GetProductUseCase for GetProductService {
    async fn execute(&self, raw_id: &str) -> Result<Option<HydratedProduct>, GetProductError> {
        let Some(id) = EntityId::parse(raw_id) else {
            return Ok(None);
        };

        let Some(product) = self.products.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut hydrated = self.hydrator.hydrate(vec![product]).await?;
        Ok(hydrated.pop())
    }
}
