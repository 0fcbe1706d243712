use async_trait::async_trait;

use crate::modules::catalog::application::{
    domain::entities::Category,
    helpers::CategoryResolver,
    ports::incoming::use_cases::{ResolveCategoryError, ResolveCategoryUseCase},
};

#[derive(Clone)]
pub struct ResolveCategoryService {
    resolver: CategoryResolver,
}

impl ResolveCategoryService {
    pub fn new(resolver: CategoryResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl ResolveCategoryUseCase for ResolveCategoryService {
    async fn execute(&self, raw: &str) -> Result<Option<Category>, ResolveCategoryError> {
        Ok(self.resolver.resolve(Some(raw)).await?)
    }
}
