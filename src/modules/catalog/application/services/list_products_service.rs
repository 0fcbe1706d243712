use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::catalog::application::{
    domain::ranking,
    helpers::{CategoryResolver, Hydrator},
    ports::incoming::use_cases::{
        ListProductsError, ListProductsQuery, ListProductsUseCase, ProductListing,
    },
    ports::outgoing::{ProductFilter, ProductOrder, ProductQuery},
};
use crate::shared::clock::Clock;

#[derive(Clone)]
pub struct ListProductsService {
    resolver: CategoryResolver,
    products: Arc<dyn ProductQuery + Send + Sync>,
    hydrator: Hydrator,
    clock: Arc<dyn Clock>,
}

impl ListProductsService {
    pub fn new(
        resolver: CategoryResolver,
        products: Arc<dyn ProductQuery + Send + Sync>,
        hydrator: Hydrator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            products,
            hydrator,
            clock,
        }
    }
}

#[async_trait]
impl ListProductsUseCase for ListProductsService {
    async fn execute(&self, query: ListProductsQuery) -> Result<ProductListing, ListProductsError> {
        // unresolvable category filter means no category filter
        let category = self.resolver.resolve(query.category.as_deref()).await?;

        let filter = ProductFilter::default()
            .in_category(category.as_ref().map(|c| c.id))
            .matching(query.text.as_deref());

        let products = match filter.text.as_deref() {
            Some(text) => {
                let matched = self
                    .products
                    .find_many(&filter, ProductOrder::Unordered)
                    .await?;
                debug!(query = %text, matched = matched.len(), "Ranking product search results");
                ranking::rank(matched, text, self.clock.now())
            }
            None => {
                self.products
                    .find_many(&filter, ProductOrder::NewestFirst)
                    .await?
            }
        };

        let products = self.hydrator.hydrate(products).await?;

        Ok(ProductListing { category, products })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::Product;
    use crate::shared::clock::FixedClock;
    use crate::tests::support::catalog_test_fixtures::{category, fixed_now, product, seller};
    use crate::tests::support::in_memory_catalog::InMemoryCatalog;

    fn service(catalog: &InMemoryCatalog) -> ListProductsService {
        let shared = Arc::new(catalog.clone());
        ListProductsService::new(
            CategoryResolver::new(shared.clone()),
            shared.clone(),
            Hydrator::new(shared.clone(), shared),
            Arc::new(FixedClock(fixed_now())),
        )
    }

    fn titles(listing: &ProductListing) -> Vec<&str> {
        listing
            .products
            .iter()
            .map(|h| h.product.title.as_str())
            .collect()
    }

    fn described(mut p: Product, description: &str) -> Product {
        p.description = description.to_string();
        p
    }

    #[tokio::test]
    async fn without_query_lists_newest_first() {
        let shop = seller("anita", "Anita's Spices");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_products([
                product("Old pepper", Some(shop.id), None, 30),
                product("New pepper", Some(shop.id), None, 1),
                product("Mid pepper", Some(shop.id), None, 10),
            ]);

        let listing = service(&catalog)
            .execute(ListProductsQuery::default())
            .await
            .unwrap();

        assert_eq!(titles(&listing), vec!["New pepper", "Mid pepper", "Old pepper"]);
        assert!(listing.category.is_none());
    }

    #[tokio::test]
    async fn blank_query_is_the_same_as_no_query() {
        let shop = seller("anita", "Anita's Spices");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_products([
                product("Old", Some(shop.id), None, 30),
                product("New", Some(shop.id), None, 1),
            ]);

        let listing = service(&catalog)
            .execute(ListProductsQuery {
                category: None,
                text: Some("   ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(titles(&listing), vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn text_query_filters_and_ranks() {
        let shop = seller("rohan", "Rohan Fisheries");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_products([
                described(product("Mud crab", Some(shop.id), None, 40), ""),
                described(product("Prawns", Some(shop.id), None, 1), "tastes like crab"),
                described(product("Crab", Some(shop.id), None, 40), ""),
                described(product("Mackerel", Some(shop.id), None, 0), "fresh"),
            ]);

        let listing = service(&catalog)
            .execute(ListProductsQuery {
                category: None,
                text: Some("crab".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(titles(&listing), vec!["Crab", "Mud crab", "Prawns"]);
    }

    #[tokio::test]
    async fn category_filter_accepts_slug_or_identifier() {
        let shop = seller("anita", "Anita's Spices");
        let spices = category("Spices", "spices");
        let art = category("Art", "art");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_categories([spices.clone(), art.clone()])
            .with_products([
                product("Pepper", Some(shop.id), Some(spices.id), 1),
                product("Painting", Some(shop.id), Some(art.id), 2),
            ]);
        let service = service(&catalog);

        let by_slug = service
            .execute(ListProductsQuery {
                category: Some("spices".to_string()),
                text: None,
            })
            .await
            .unwrap();
        assert_eq!(titles(&by_slug), vec!["Pepper"]);
        assert_eq!(by_slug.category, Some(spices.clone()));

        let by_id = service
            .execute(ListProductsQuery {
                category: Some(art.id.to_string()),
                text: None,
            })
            .await
            .unwrap();
        assert_eq!(titles(&by_id), vec!["Painting"]);
    }

    #[tokio::test]
    async fn unknown_category_is_ignored() {
        let shop = seller("anita", "Anita's Spices");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_products([
                product("A", Some(shop.id), None, 1),
                product("B", Some(shop.id), None, 2),
            ]);

        let listing = service(&catalog)
            .execute(ListProductsQuery {
                category: Some("no-such-category".to_string()),
                text: None,
            })
            .await
            .unwrap();

        assert_eq!(listing.products.len(), 2);
        assert!(listing.category.is_none());
    }

    #[tokio::test]
    async fn results_are_hydrated_with_bounded_fetches() {
        let shop = seller("anita", "Anita's Spices");
        let spices = category("Spices", "spices");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_categories([spices.clone()])
            .with_products((0..10).map(|i| {
                product(&format!("Spice {}", i), Some(shop.id), Some(spices.id), i)
            }));

        let listing = service(&catalog)
            .execute(ListProductsQuery::default())
            .await
            .unwrap();

        assert!(listing
            .products
            .iter()
            .all(|h| h.owner.as_ref().map(|o| o.id) == Some(shop.id)));
        assert_eq!(
            catalog.calls(),
            vec![
                "products.find_many",
                "users.find_by_ids",
                "categories.find_by_ids"
            ]
        );
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let catalog = InMemoryCatalog::new().failing("db down");

        let result = service(&catalog).execute(ListProductsQuery::default()).await;

        match result {
            Err(ListProductsError::QueryFailed(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected QueryFailed error, got {:?}", other),
        }
    }
}
