use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::catalog::application::{
    domain::entities::Product,
    helpers::CategoryResolver,
    ports::incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
    ports::outgoing::{NewProduct, ProductRepository, UserQuery},
};
use crate::shared::clock::Clock;

#[derive(Clone)]
pub struct CreateProductService {
    users: Arc<dyn UserQuery + Send + Sync>,
    resolver: CategoryResolver,
    repository: Arc<dyn ProductRepository + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl CreateProductService {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        resolver: CategoryResolver,
        repository: Arc<dyn ProductRepository + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            resolver,
            repository,
            clock,
        }
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductService {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError> {
        let seller = self
            .users
            .find_by_id(command.seller_id())
            .await?
            .ok_or(CreateProductError::SellerNotFound)?;

        if !seller.is_seller() {
            return Err(CreateProductError::NotASeller);
        }

        // an unresolvable category leaves the product uncategorized
        let category = self.resolver.resolve(command.category()).await?;

        let product = self
            .repository
            .insert(NewProduct {
                title: command.title().to_string(),
                price: command.price(),
                quantity: command.quantity(),
                description: command.description().to_string(),
                owner_id: seller.id,
                category_id: category.map(|c| c.id),
                created_at: self.clock.now(),
            })
            .await?;

        info!(product_id = %product.id, seller_id = %seller.id, "Product created");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::EntityId;
    use crate::shared::clock::FixedClock;
    use crate::tests::support::catalog_test_fixtures::{buyer, category, fixed_now, seller};
    use crate::tests::support::in_memory_catalog::InMemoryCatalog;

    fn service(catalog: &InMemoryCatalog) -> CreateProductService {
        let shared = Arc::new(catalog.clone());
        CreateProductService::new(
            shared.clone(),
            CategoryResolver::new(shared.clone()),
            shared,
            Arc::new(FixedClock(fixed_now())),
        )
    }

    #[tokio::test]
    async fn seller_creates_categorized_product() {
        let shop = seller("anita", "Anita's Spices");
        let spices = category("Spices", "spices");
        let catalog = InMemoryCatalog::new()
            .with_users([shop.clone()])
            .with_categories([spices.clone()]);

        let command =
            CreateProductCommand::new(shop.id, "Pepper", 180.0, Some(3), "Black", Some("spices"))
                .unwrap();
        let created = service(&catalog).execute(command).await.unwrap();

        assert_eq!(created.title, "Pepper");
        assert_eq!(created.quantity, 3);
        assert_eq!(created.owner_id, Some(shop.id));
        assert_eq!(created.category_id, Some(spices.id));
        assert_eq!(created.created_at, Some(fixed_now()));
        assert_eq!(catalog.products().len(), 1);
    }

    #[tokio::test]
    async fn unresolvable_category_means_uncategorized() {
        let shop = seller("anita", "Anita's Spices");
        let catalog = InMemoryCatalog::new().with_users([shop.clone()]);

        let command =
            CreateProductCommand::new(shop.id, "Pepper", 180.0, None, "", Some("unknown")).unwrap();
        let created = service(&catalog).execute(command).await.unwrap();

        assert_eq!(created.category_id, None);
    }

    #[tokio::test]
    async fn buyer_cannot_post() {
        let ravi = buyer("ravi");
        let catalog = InMemoryCatalog::new().with_users([ravi.clone()]);

        let command = CreateProductCommand::new(ravi.id, "Pepper", 180.0, None, "", None).unwrap();

        assert_eq!(
            service(&catalog).execute(command).await,
            Err(CreateProductError::NotASeller)
        );
        assert!(catalog.products().is_empty());
    }

    #[tokio::test]
    async fn unknown_seller_is_rejected() {
        let catalog = InMemoryCatalog::new();

        let command =
            CreateProductCommand::new(EntityId::generate(), "Pepper", 180.0, None, "", None)
                .unwrap();

        assert_eq!(
            service(&catalog).execute(command).await,
            Err(CreateProductError::SellerNotFound)
        );
    }
}
