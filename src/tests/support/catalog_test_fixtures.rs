use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::modules::catalog::application::domain::entities::{
    Category, EntityId, GeoPoint, MediaRef, Product, StoreProfile, StoreReview, User, UserType,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

pub fn buyer(username: &str) -> User {
    User {
        id: EntityId::generate(),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        user_type: UserType::Buyer,
        store: None,
        created_at: Some(days_ago(100)),
    }
}

pub fn seller(username: &str, store_name: &str) -> User {
    User {
        id: EntityId::generate(),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        user_type: UserType::Seller,
        store: Some(StoreProfile {
            name: Some(store_name.to_string()),
            location: Some("Market Road".to_string()),
            city: Some("Margao".to_string()),
            address: None,
            coordinates: None,
            image: MediaRef::store_placeholder(),
        }),
        created_at: Some(days_ago(100)),
    }
}

pub fn mapped_seller(username: &str, store_name: &str, lat: f64, lng: f64) -> User {
    let mut user = seller(username, store_name);
    if let Some(store) = user.store.as_mut() {
        store.coordinates = Some(GeoPoint {
            latitude: lat,
            longitude: lng,
        });
    }
    user
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        id: EntityId::generate(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn product(
    title: &str,
    owner: Option<EntityId>,
    category: Option<EntityId>,
    age_days: i64,
) -> Product {
    Product {
        id: EntityId::generate(),
        title: title.to_string(),
        price: 250.0,
        quantity: 1,
        description: String::new(),
        image: MediaRef::Missing,
        owner_id: owner,
        category_id: category,
        created_at: Some(days_ago(age_days)),
    }
}

pub fn review(store_owner: EntityId, reviewer: EntityId, rating: u8, age_days: i64) -> StoreReview {
    StoreReview {
        id: EntityId::generate(),
        store_owner_id: store_owner,
        reviewer_id: reviewer,
        rating,
        review_text: format!("{} stars", rating),
        created_at: Some(days_ago(age_days)),
    }
}
