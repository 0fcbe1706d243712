//! Raw store documents and the mapping step into domain records.
//!
//! Stored documents are loosely typed: references may be ObjectIds or hex
//! strings, numbers may be ints or doubles, and timestamps may be missing.
//! Everything is normalized here so nothing downstream looks at raw fields.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::modules::catalog::application::domain::entities::{
    Category, EntityId, GeoPoint, MediaRef, Product, StoreProfile, StoreReview, User, UserType,
    MAX_RATING, MIN_RATING,
};

// ============================================================================
// Documents
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_location: Option<String>,
    #[serde(default)]
    pub store_city: Option<String>,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub store_latitude: Option<f64>,
    #[serde(default)]
    pub store_longitude: Option<f64>,
    #[serde(default)]
    pub store_image: Option<String>,
    #[serde(default)]
    pub store_image_media_id: Option<Bson>,
    #[serde(default)]
    pub created_at: Option<Bson>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<Bson>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default)]
    pub image_media_id: Option<Bson>,
    #[serde(default)]
    pub user_id: Option<Bson>,
    #[serde(default)]
    pub category_id: Option<Bson>,
    #[serde(default)]
    pub created_at: Option<Bson>,
}

#[derive(Debug, Deserialize)]
pub struct StoreReviewDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub store_owner_id: Bson,
    pub reviewer_id: Bson,
    #[serde(default)]
    pub rating: Option<Bson>,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<Bson>,
}

// ============================================================================
// Field helpers
// ============================================================================

/// ObjectId, or a string holding one.
pub fn entity_id(value: Option<&Bson>) -> Option<EntityId> {
    match value? {
        Bson::ObjectId(oid) => Some(EntityId::from(*oid)),
        Bson::String(raw) => EntityId::parse(raw),
        _ => None,
    }
}

pub fn timestamp(value: Option<&Bson>) -> Option<DateTime<Utc>> {
    match value? {
        Bson::DateTime(dt) => DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()),
        _ => None,
    }
}

pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

/// Whole number stored as int32, int64 or an integral double.
pub fn integer(value: Option<&Bson>) -> Option<i64> {
    match value? {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) if v.fract() == 0.0 => Some(*v as i64),
        _ => None,
    }
}

/// Blob reference as a string, whatever type the migration stored it as.
pub fn media_id(value: Option<&Bson>) -> Option<String> {
    match value? {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Mapping
// ============================================================================

impl UserDocument {
    pub fn into_entity(self) -> User {
        let user_type = UserType::from_stored(self.user_type.as_deref());
        let store = (user_type == UserType::Seller).then(|| StoreProfile {
            name: non_blank(self.store_name),
            location: non_blank(self.store_location),
            city: non_blank(self.store_city),
            address: non_blank(self.store_address),
            coordinates: GeoPoint::from_pair(self.store_latitude, self.store_longitude),
            image: MediaRef::for_store(
                media_id(self.store_image_media_id.as_ref()),
                self.store_image.as_deref(),
            ),
        });

        User {
            id: EntityId::from(self.id),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            user_type,
            store,
            created_at: timestamp(self.created_at.as_ref()),
        }
    }
}

impl CategoryDocument {
    pub fn into_entity(self) -> Category {
        Category {
            id: EntityId::from(self.id),
            name: self.name.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
        }
    }
}

impl ProductDocument {
    pub fn into_entity(self) -> Product {
        let quantity = integer(self.quantity.as_ref())
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(1);

        Product {
            id: EntityId::from(self.id),
            title: self.title.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            quantity,
            description: self.description.unwrap_or_default(),
            image: MediaRef::for_product(
                media_id(self.image_media_id.as_ref()),
                self.image_filename.as_deref(),
            ),
            owner_id: entity_id(self.user_id.as_ref()),
            category_id: entity_id(self.category_id.as_ref()),
            created_at: timestamp(self.created_at.as_ref()),
        }
    }
}

impl StoreReviewDocument {
    /// `None` when the owner or reviewer reference is unusable or the rating
    /// is outside 1..=5.
    pub fn into_entity(self) -> Option<StoreReview> {
        let rating = integer(self.rating.as_ref())
            .and_then(|r| u8::try_from(r).ok())
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))?;

        Some(StoreReview {
            id: EntityId::from(self.id),
            store_owner_id: entity_id(Some(&self.store_owner_id))?,
            reviewer_id: entity_id(Some(&self.reviewer_id))?,
            rating,
            review_text: self.review_text.unwrap_or_default(),
            created_at: timestamp(self.created_at.as_ref()),
        })
    }
}

/// Decodes one document, logging and dropping it when it does not fit `D`.
pub fn decode<D: DeserializeOwned>(collection: &str, doc: Document) -> Option<D> {
    let id = doc.get("_id").cloned();
    match bson::from_document::<D>(doc) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(collection, id = ?id, error = %e, "Skipping malformed document");
            None
        }
    }
}
