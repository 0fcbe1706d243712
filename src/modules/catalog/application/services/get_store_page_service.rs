use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::{
    domain::entities::EntityId,
    helpers::{Hydrator, RatingAggregator},
    ports::incoming::use_cases::{GetStorePageError, GetStorePageUseCase, StorePage},
    ports::outgoing::{ProductFilter, ProductOrder, ProductQuery, ReviewQuery, UserQuery},
};

#[derive(Clone)]
pub struct GetStorePageService {
    users: Arc<dyn UserQuery + Send + Sync>,
    products: Arc<dyn ProductQuery + Send + Sync>,
    reviews: Arc<dyn ReviewQuery + Send + Sync>,
    hydrator: Hydrator,
    aggregator: RatingAggregator,
}

impl GetStorePageService {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        products: Arc<dyn ProductQuery + Send + Sync>,
        reviews: Arc<dyn ReviewQuery + Send + Sync>,
        hydrator: Hydrator,
        aggregator: RatingAggregator,
    ) -> Self {
        Self {
            users,
            products,
            reviews,
            hydrator,
            aggregator,
        }
    }
}

#[async_trait]
impl GetStorePageUseCase for GetStorePageService {
    async fn execute(
        &self,
        raw_owner_id: &str,
        viewer_id: Option<EntityId>,
    ) -> Result<StorePage, GetStorePageError> {
        let owner_id = EntityId::parse(raw_owner_id).ok_or(GetStorePageError::StoreNotFound)?;

        let owner = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or(GetStorePageError::StoreNotFound)?;

        if !owner.is_seller() {
            return Err(GetStorePageError::NotASeller);
        }

        let products = self
            .products
            .find_many(
                &ProductFilter::default().owned_by(owner_id),
                ProductOrder::NewestFirst,
            )
            .await?;
        let products = self.hydrator.hydrate(products).await?;

        let reviews = self.reviews.list_for_store(owner_id).await?;
        let reviews = self.hydrator.hydrate_reviews(reviews).await?;

        let rating = self.aggregator.summary(owner_id).await?;

        // the listed reviews already hold the viewer's one, if any
        let viewer_review = viewer_id
            .filter(|viewer| *viewer != owner_id)
            .and_then(|viewer| {
                reviews
                    .iter()
                    .find(|r| r.review.reviewer_id == viewer)
                    .map(|r| r.review.clone())
            });

        Ok(StorePage {
            owner,
            products,
            reviews,
            rating,
            viewer_review,
        })
    }
}
