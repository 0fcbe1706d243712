use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use std::fmt;

/// Store image shown for sellers that never uploaded one.
pub const DEFAULT_STORE_IMAGE: &str = "images/default_store_img.png";
/// Bare file name older documents used for the same placeholder.
pub const LEGACY_DEFAULT_STORE_IMAGE: &str = "default_store_img.png";

pub const UNKNOWN_SELLER_NAME: &str = "Unknown seller";
pub const UNKNOWN_STORE_NAME: &str = "Unknown store";

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque identifier of any stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(ObjectId);

impl EntityId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a canonical identifier. Empty or malformed input is `None`,
    /// never an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        ObjectId::parse_str(trimmed).ok().map(Self)
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for EntityId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<EntityId> for ObjectId {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

// ============================================================================
// Media references
// ============================================================================

/// Where an entity's image lives, resolved once when the document is mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    /// Migrated into the blob store.
    Blob { media_id: String },
    /// Path relative to the static root (legacy upload or placeholder).
    Static { path: String },
    Missing,
}

impl MediaRef {
    pub fn for_store(media_id: Option<String>, legacy_path: Option<&str>) -> Self {
        if let Some(media_id) = media_id.filter(|m| !m.trim().is_empty()) {
            return MediaRef::Blob { media_id };
        }
        match legacy_path.map(str::trim) {
            None | Some("") => Self::store_placeholder(),
            Some(p) if p == LEGACY_DEFAULT_STORE_IMAGE || p == DEFAULT_STORE_IMAGE => {
                Self::store_placeholder()
            }
            Some(p) => MediaRef::Static {
                path: normalize_static_path(p),
            },
        }
    }

    pub fn for_product(media_id: Option<String>, legacy_path: Option<&str>) -> Self {
        if let Some(media_id) = media_id.filter(|m| !m.trim().is_empty()) {
            return MediaRef::Blob { media_id };
        }
        match legacy_path.map(str::trim) {
            None | Some("") => MediaRef::Missing,
            Some(p) => MediaRef::Static {
                path: normalize_static_path(p),
            },
        }
    }

    pub fn store_placeholder() -> Self {
        MediaRef::Static {
            path: DEFAULT_STORE_IMAGE.to_string(),
        }
    }
}

/// Legacy references are stored relative to `uploads/` unless they already
/// name an `uploads/` or `images/` path.
fn normalize_static_path(raw: &str) -> String {
    if raw.starts_with("uploads/") || raw.starts_with("images/") {
        raw.to_string()
    } else {
        format!("uploads/{}", raw.trim_start_matches('/'))
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Buyer,
    Seller,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Buyer => "buyer",
            UserType::Seller => "seller",
        }
    }

    /// Unknown values degrade to `Buyer`, the role without store privileges.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("seller") => UserType::Seller,
            _ => UserType::Buyer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Coordinates exist as a pair or not at all.
    pub fn from_pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreProfile {
    pub name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub image: MediaRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub user_type: UserType,
    /// Present only for sellers.
    pub store: Option<StoreProfile>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Stand-in for an owner reference that no longer resolves.
    pub fn placeholder_seller(id: EntityId) -> Self {
        Self {
            id,
            username: UNKNOWN_SELLER_NAME.to_string(),
            email: String::new(),
            user_type: UserType::Seller,
            store: Some(StoreProfile {
                name: Some(UNKNOWN_STORE_NAME.to_string()),
                location: None,
                city: None,
                address: None,
                coordinates: None,
                image: MediaRef::store_placeholder(),
            }),
            created_at: None,
        }
    }

    pub fn is_seller(&self) -> bool {
        self.user_type == UserType::Seller
    }

    /// Store name when set, otherwise the username.
    pub fn display_store_name(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: EntityId,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub image: MediaRef,
    pub owner_id: Option<EntityId>,
    /// `None` means uncategorized, including dangling references.
    pub category_id: Option<EntityId>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReview {
    pub id: EntityId,
    pub store_owner_id: EntityId,
    pub reviewer_id: EntityId,
    pub rating: u8,
    pub review_text: String,
    pub created_at: Option<DateTime<Utc>>,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// ============================================================================
// Hydrated views (request scoped, never persisted)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedProduct {
    pub product: Product,
    /// `None` only when the product carries no owner reference at all.
    pub owner: Option<User>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedReview {
    pub review: StoreReview,
    pub reviewer: Option<User>,
}
