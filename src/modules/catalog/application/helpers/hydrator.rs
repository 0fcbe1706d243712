use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::modules::catalog::application::domain::entities::{
    Category, EntityId, HydratedProduct, HydratedReview, Product, StoreReview, User,
};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQueryError, CategoryQuery, UserQuery,
};

/// Joins products and reviews with the users and categories they reference.
///
/// Each batch costs at most one users fetch and one categories fetch no matter
/// how many records it holds; an empty batch costs nothing.
#[derive(Clone)]
pub struct Hydrator {
    users: Arc<dyn UserQuery + Send + Sync>,
    categories: Arc<dyn CategoryQuery + Send + Sync>,
}

impl Hydrator {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        categories: Arc<dyn CategoryQuery + Send + Sync>,
    ) -> Self {
        Self { users, categories }
    }

    /// Order-preserving. An owner reference that no longer resolves is
    /// replaced by the placeholder seller.
    pub async fn hydrate(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<HydratedProduct>, CatalogQueryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids = distinct(products.iter().filter_map(|p| p.owner_id));
        let category_ids = distinct(products.iter().filter_map(|p| p.category_id));

        let owners = self.users_by_id(&owner_ids).await?;
        let categories = self.categories_by_id(&category_ids).await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let owner = product.owner_id.map(|id| {
                    owners
                        .get(&id)
                        .cloned()
                        .unwrap_or_else(|| User::placeholder_seller(id))
                });
                let category = product
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                HydratedProduct {
                    product,
                    owner,
                    category,
                }
            })
            .collect())
    }

    /// Joins each review with its author in one batched fetch.
    pub async fn hydrate_reviews(
        &self,
        reviews: Vec<StoreReview>,
    ) -> Result<Vec<HydratedReview>, CatalogQueryError> {
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let reviewer_ids = distinct(reviews.iter().map(|r| r.reviewer_id));
        let reviewers = self.users_by_id(&reviewer_ids).await?;

        Ok(reviews
            .into_iter()
            .map(|review| {
                let reviewer = reviewers.get(&review.reviewer_id).cloned();
                HydratedReview { review, reviewer }
            })
            .collect())
    }

    async fn users_by_id(
        &self,
        ids: &[EntityId],
    ) -> Result<HashMap<EntityId, User>, CatalogQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = self.users.find_by_ids(ids).await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    async fn categories_by_id(
        &self,
        ids: &[EntityId],
    ) -> Result<HashMap<EntityId, Category>, CatalogQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let categories = self.categories.find_by_ids(ids).await?;
        Ok(categories.into_iter().map(|c| (c.id, c)).collect())
    }
}

/// Distinct ids in first-seen order.
fn distinct(ids: impl Iterator<Item = EntityId>) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
