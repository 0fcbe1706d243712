use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::catalog::application::{
    domain::{
        entities::{EntityId, MediaRef, User},
        rating::RatingSummary,
    },
    helpers::RatingAggregator,
    ports::incoming::use_cases::{ListStoresError, ListStoresUseCase, StoreDirectoryEntry},
    ports::outgoing::{ProductQuery, UserQuery},
};

/// Store directory with ratings and product counts for every seller, built
/// from one aggregation per figure rather than one query per seller.
#[derive(Clone)]
pub struct ListStoresService {
    users: Arc<dyn UserQuery + Send + Sync>,
    products: Arc<dyn ProductQuery + Send + Sync>,
    aggregator: RatingAggregator,
}

impl ListStoresService {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        products: Arc<dyn ProductQuery + Send + Sync>,
        aggregator: RatingAggregator,
    ) -> Self {
        Self {
            users,
            products,
            aggregator,
        }
    }
}

fn has_coordinates(user: &User) -> bool {
    user.store
        .as_ref()
        .is_some_and(|store| store.coordinates.is_some())
}

fn directory_entry(
    user: User,
    ratings: &HashMap<EntityId, RatingSummary>,
    counts: &HashMap<EntityId, u64>,
) -> StoreDirectoryEntry {
    let name = user.display_store_name().to_string();
    let rating = ratings.get(&user.id).copied().unwrap_or_default();
    let product_count = counts.get(&user.id).copied().unwrap_or(0);

    match user.store {
        Some(store) => StoreDirectoryEntry {
            owner_id: user.id,
            name,
            city: store.city,
            location: store.location,
            address: store.address,
            coordinates: store.coordinates,
            image: store.image,
            rating,
            product_count,
        },
        None => StoreDirectoryEntry {
            owner_id: user.id,
            name,
            city: None,
            location: None,
            address: None,
            coordinates: None,
            image: MediaRef::store_placeholder(),
            rating,
            product_count,
        },
    }
}

#[async_trait]
impl ListStoresUseCase for ListStoresService {
    async fn execute(&self, only_mapped: bool) -> Result<Vec<StoreDirectoryEntry>, ListStoresError> {
        let sellers: Vec<User> = self
            .users
            .list_sellers()
            .await?
            .into_iter()
            .filter(|u| !only_mapped || has_coordinates(u))
            .collect();

        if sellers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<EntityId> = sellers.iter().map(|s| s.id).collect();
        let ratings = self.aggregator.summaries(&ids).await?;
        let counts = self.products.count_by_owner(&ids).await?;

        Ok(sellers
            .into_iter()
            .map(|user| directory_entry(user, &ratings, &counts))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::catalog_test_fixtures::{
        buyer, mapped_seller, product, review, seller,
    };
    use crate::tests::support::in_memory_catalog::InMemoryCatalog;

    fn service(catalog: &InMemoryCatalog) -> ListStoresService {
        let shared = Arc::new(catalog.clone());
        ListStoresService::new(shared.clone(), shared.clone(), RatingAggregator::new(shared))
    }

    #[tokio::test]
    async fn lists_every_seller_with_stats() {
        let anita = mapped_seller("anita", "Anita's Spices", 15.27, 73.95);
        let mut rohan = seller("rohan", "");
        if let Some(store) = rohan.store.as_mut() {
            store.name = None;
        }
        let ravi = buyer("ravi");
        let catalog = InMemoryCatalog::new()
            .with_users([anita.clone(), rohan.clone(), ravi.clone()])
            .with_products([
                product("Pepper", Some(anita.id), None, 1),
                product("Cloves", Some(anita.id), None, 2),
                product("Crab", Some(rohan.id), None, 3),
            ])
            .with_reviews([
                review(anita.id, ravi.id, 4, 1),
                review(anita.id, rohan.id, 5, 1),
            ]);

        let stores = service(&catalog).execute(false).await.unwrap();

        assert_eq!(stores.len(), 2);

        assert_eq!(stores[0].owner_id, anita.id);
        assert_eq!(stores[0].name, "Anita's Spices");
        assert_eq!(stores[0].product_count, 2);
        assert_eq!(stores[0].rating.average, Some(4.5));
        assert_eq!(stores[0].rating.count, 2);
        assert!(stores[0].coordinates.is_some());

        assert_eq!(stores[1].name, "rohan");
        assert_eq!(stores[1].product_count, 1);
        assert_eq!(stores[1].rating, RatingSummary::empty());

        assert_eq!(
            catalog.calls(),
            vec![
                "users.list_sellers",
                "store_reviews.rating_stats_by_store",
                "products.count_by_owner"
            ]
        );
    }

    #[tokio::test]
    async fn only_mapped_keeps_sellers_with_coordinates() {
        let mapped = mapped_seller("anita", "Anita's Spices", 15.27, 73.95);
        let unmapped = seller("rohan", "Rohan Fisheries");
        let catalog = InMemoryCatalog::new().with_users([mapped.clone(), unmapped]);

        let stores = service(&catalog).execute(true).await.unwrap();

        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].owner_id, mapped.id);
    }

    #[tokio::test]
    async fn no_sellers_skips_aggregations() {
        let catalog = InMemoryCatalog::new().with_users([buyer("ravi")]);

        let stores = service(&catalog).execute(false).await.unwrap();

        assert!(stores.is_empty());
        assert_eq!(catalog.calls(), vec!["users.list_sellers"]);
    }
}
