use async_trait::async_trait;
use std::collections::HashMap;

use super::CatalogQueryError;
use crate::modules::catalog::application::domain::entities::{EntityId, Product};

/// Conjunction of optional constraints evaluated by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<EntityId>,
    pub owner_id: Option<EntityId>,
    /// Case-insensitive literal substring of title OR description.
    pub text: Option<String>,
}

impl ProductFilter {
    pub fn in_category(mut self, category_id: Option<EntityId>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn owned_by(mut self, owner_id: EntityId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Blank text means no text constraint.
    pub fn matching(mut self, text: Option<&str>) -> Self {
        self.text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    NewestFirst,
    /// Store order; used when the caller ranks the result itself.
    Unordered,
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Product>, CatalogQueryError>;

    async fn find_many(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
    ) -> Result<Vec<Product>, CatalogQueryError>;

    /// Product count per category from a single grouped aggregation.
    /// Categories without products are absent.
    async fn count_by_category(&self) -> Result<HashMap<EntityId, u64>, CatalogQueryError>;

    /// Product count per owner for the given owners, from a single grouped
    /// aggregation.
    async fn count_by_owner(
        &self,
        owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, u64>, CatalogQueryError>;
}
