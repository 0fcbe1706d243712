use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::{
    Category, EntityId, MediaRef, Product, StoreReview, User,
};
use crate::modules::catalog::application::domain::rating::RatingStats;
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQueryError, CategoryQuery, NewProduct, ProductFilter, ProductOrder, ProductQuery,
    ProductRepository, ProductRepositoryError, ReviewQuery, ReviewQueryError, ReviewRepository,
    ReviewRepositoryError, ReviewUpsert, UpsertOutcome, UserQuery,
};

/// Shared in-memory implementation of every catalog port. Clones share state,
/// so one instance can back several ports and still count round-trips.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    users: Arc<Mutex<Vec<User>>>,
    categories: Arc<Mutex<Vec<Category>>>,
    products: Arc<Mutex<Vec<Product>>>,
    reviews: Arc<Mutex<Vec<StoreReview>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        self.users.lock().unwrap().extend(users);
        self
    }

    pub fn with_categories(self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.lock().unwrap().extend(categories);
        self
    }

    pub fn with_products(self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.lock().unwrap().extend(products);
        self
    }

    pub fn with_reviews(self, reviews: impl IntoIterator<Item = StoreReview>) -> Self {
        self.reviews.lock().unwrap().extend(reviews);
        self
    }

    /// Every subsequent call fails with a database error.
    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == name).count()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn reviews(&self) -> Vec<StoreReview> {
        self.reviews.lock().unwrap().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) -> Result<(), String> {
        self.calls.lock().unwrap().push(name);
        match self.failure.lock().unwrap().as_ref() {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }

    fn record_query(&self, name: &'static str) -> Result<(), CatalogQueryError> {
        self.record(name).map_err(CatalogQueryError::DatabaseError)
    }

    fn record_review_query(&self, name: &'static str) -> Result<(), ReviewQueryError> {
        self.record(name).map_err(ReviewQueryError::DatabaseError)
    }
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(category_id) = filter.category_id {
        if product.category_id != Some(category_id) {
            return false;
        }
    }
    if let Some(owner_id) = filter.owner_id {
        if product.owner_id != Some(owner_id) {
            return false;
        }
    }
    if let Some(text) = filter.text.as_deref() {
        let needle = text.to_lowercase();
        return product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle);
    }
    true
}

#[async_trait]
impl UserQuery for InMemoryCatalog {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, CatalogQueryError> {
        self.record_query("users.find_by_id")?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<User>, CatalogQueryError> {
        self.record_query("users.find_by_ids")?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn list_sellers(&self) -> Result<Vec<User>, CatalogQueryError> {
        self.record_query("users.list_sellers")?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_seller())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryQuery for InMemoryCatalog {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, CatalogQueryError> {
        self.record_query("categories.find_by_id")?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogQueryError> {
        self.record_query("categories.find_by_slug")?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Category>, CatalogQueryError> {
        self.record_query("categories.find_by_ids")?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CatalogQueryError> {
        self.record_query("categories.list_all")?;
        let mut all = self.categories.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[async_trait]
impl ProductQuery for InMemoryCatalog {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Product>, CatalogQueryError> {
        self.record_query("products.find_by_id")?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        self.record_query("products.find_many")?;
        let mut found: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect();
        if order == ProductOrder::NewestFirst {
            found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(found)
    }

    async fn count_by_category(&self) -> Result<HashMap<EntityId, u64>, CatalogQueryError> {
        self.record_query("products.count_by_category")?;
        let mut counts = HashMap::new();
        for category_id in self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| p.category_id)
        {
            *counts.entry(category_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn count_by_owner(
        &self,
        owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, u64>, CatalogQueryError> {
        self.record_query("products.count_by_owner")?;
        let mut counts = HashMap::new();
        for owner_id in self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| p.owner_id)
            .filter(|id| owner_ids.contains(id))
        {
            *counts.entry(owner_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductRepositoryError> {
        self.record("products.insert")
            .map_err(ProductRepositoryError::DatabaseError)?;
        let stored = Product {
            id: EntityId::generate(),
            title: product.title,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            image: MediaRef::Missing,
            owner_id: Some(product.owner_id),
            category_id: product.category_id,
            created_at: Some(product.created_at),
        };
        self.products.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ReviewQuery for InMemoryCatalog {
    async fn average_rating(
        &self,
        store_owner_id: EntityId,
    ) -> Result<Option<f64>, ReviewQueryError> {
        self.record_review_query("store_reviews.average_rating")?;
        let ratings: Vec<f64> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.store_owner_id == store_owner_id)
            .map(|r| f64::from(r.rating))
            .collect();
        if ratings.is_empty() {
            return Ok(None);
        }
        Ok(Some(ratings.iter().sum::<f64>() / ratings.len() as f64))
    }

    async fn count_for_store(&self, store_owner_id: EntityId) -> Result<u64, ReviewQueryError> {
        self.record_review_query("store_reviews.count_for_store")?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.store_owner_id == store_owner_id)
            .count() as u64)
    }

    async fn list_for_store(
        &self,
        store_owner_id: EntityId,
    ) -> Result<Vec<StoreReview>, ReviewQueryError> {
        self.record_review_query("store_reviews.list_for_store")?;
        let mut found: Vec<StoreReview> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.store_owner_id == store_owner_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn rating_stats_by_store(
        &self,
        store_owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, RatingStats>, ReviewQueryError> {
        self.record_review_query("store_reviews.rating_stats_by_store")?;
        let mut sums: HashMap<EntityId, (f64, u64)> = HashMap::new();
        for review in self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| store_owner_ids.contains(&r.store_owner_id))
        {
            let entry = sums.entry(review.store_owner_id).or_insert((0.0, 0));
            entry.0 += f64::from(review.rating);
            entry.1 += 1;
        }
        Ok(sums
            .into_iter()
            .map(|(id, (sum, count))| {
                (
                    id,
                    RatingStats {
                        average: Some(sum / count as f64),
                        count,
                    },
                )
            })
            .collect())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryCatalog {
    async fn upsert(&self, review: &ReviewUpsert) -> Result<UpsertOutcome, ReviewRepositoryError> {
        self.record("store_reviews.upsert")
            .map_err(ReviewRepositoryError::DatabaseError)?;
        let mut reviews = self.reviews.lock().unwrap();
        if let Some(existing) = reviews.iter_mut().find(|r| {
            r.store_owner_id == review.store_owner_id && r.reviewer_id == review.reviewer_id
        }) {
            existing.rating = review.rating;
            existing.review_text = review.review_text.clone();
            existing.created_at = Some(review.submitted_at);
            return Ok(UpsertOutcome::Updated);
        }
        reviews.push(StoreReview {
            id: EntityId::generate(),
            store_owner_id: review.store_owner_id,
            reviewer_id: review.reviewer_id,
            rating: review.rating,
            review_text: review.review_text.clone(),
            created_at: Some(review.submitted_at),
        });
        Ok(UpsertOutcome::Created)
    }

    async fn update_existing(&self, review: &ReviewUpsert) -> Result<(), ReviewRepositoryError> {
        self.record("store_reviews.update_existing")
            .map_err(ReviewRepositoryError::DatabaseError)?;
        let mut reviews = self.reviews.lock().unwrap();
        if let Some(existing) = reviews.iter_mut().find(|r| {
            r.store_owner_id == review.store_owner_id && r.reviewer_id == review.reviewer_id
        }) {
            existing.rating = review.rating;
            existing.review_text = review.review_text.clone();
            existing.created_at = Some(review.submitted_at);
        }
        Ok(())
    }
}
