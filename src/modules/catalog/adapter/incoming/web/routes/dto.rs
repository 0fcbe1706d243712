use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::catalog::application::domain::entities::{
    Category, GeoPoint, HydratedProduct, HydratedReview, MediaRef, StoreReview, User,
};
use crate::modules::catalog::application::domain::rating::RatingSummary;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CategoryWithCount, ProductListing, StoreDirectoryEntry, StorePage,
};

/// Image reference. Static files carry the URL this server serves them from;
/// blobs carry only their object key, resolved against the media bucket.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageDto {
    /// `blob`, `static` or `missing`
    #[schema(example = "static")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "uploads/prawns.jpg")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/static/uploads/prawns.jpg")]
    pub url: Option<String>,
}

impl From<&MediaRef> for ImageDto {
    fn from(image: &MediaRef) -> Self {
        match image {
            MediaRef::Blob { media_id } => Self {
                kind: "blob".to_string(),
                media_id: Some(media_id.clone()),
                path: None,
                url: None,
            },
            MediaRef::Static { path } => Self {
                kind: "static".to_string(),
                media_id: None,
                path: Some(path.clone()),
                url: Some(format!("/static/{}", path)),
            },
            MediaRef::Missing => Self {
                kind: "missing".to_string(),
                media_id: None,
                path: None,
                url: None,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDto {
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Seafood")]
    pub name: String,
    #[schema(example = "seafood")]
    pub slug: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryWithCountDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    #[schema(example = 12)]
    pub product_count: u64,
}

impl From<&CategoryWithCount> for CategoryWithCountDto {
    fn from(entry: &CategoryWithCount) -> Self {
        Self {
            category: CategoryDto::from(&entry.category),
            product_count: entry.product_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SellerDto {
    pub id: String,
    pub username: String,
    /// Store name, or the username when the seller never set one
    #[schema(example = "Rohan Fisheries")]
    pub store_name: String,
    pub city: Option<String>,
    pub location: Option<String>,
}

impl From<&User> for SellerDto {
    fn from(user: &User) -> Self {
        let store = user.store.as_ref();
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            store_name: user.display_store_name().to_string(),
            city: store.and_then(|s| s.city.clone()),
            location: store.and_then(|s| s.location.clone()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: String,
    #[schema(example = "Tiger prawns 1kg")]
    pub title: String,
    #[schema(example = 450.0)]
    pub price: f64,
    #[schema(example = 3)]
    pub quantity: u32,
    pub description: String,
    pub image: ImageDto,
    pub category: Option<CategoryDto>,
    pub seller: Option<SellerDto>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&HydratedProduct> for ProductDto {
    fn from(hydrated: &HydratedProduct) -> Self {
        let product = &hydrated.product;
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            price: product.price,
            quantity: product.quantity,
            description: product.description.clone(),
            image: ImageDto::from(&product.image),
            category: hydrated.category.as_ref().map(CategoryDto::from),
            seller: hydrated.owner.as_ref().map(SellerDto::from),
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListDto {
    /// The resolved category filter, absent when none applied
    pub category: Option<CategoryDto>,
    pub products: Vec<ProductDto>,
}

impl From<&ProductListing> for ProductListDto {
    fn from(listing: &ProductListing) -> Self {
        Self {
            category: listing.category.as_ref().map(CategoryDto::from),
            products: listing.products.iter().map(ProductDto::from).collect(),
        }
    }
}

/// `average` is null when the store has no reviews.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatingDto {
    #[schema(example = 4.3)]
    pub average: Option<f64>,
    #[schema(example = 3)]
    pub count: u64,
}

impl From<RatingSummary> for RatingDto {
    fn from(summary: RatingSummary) -> Self {
        Self {
            average: summary.average,
            count: summary.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewDto {
    pub id: String,
    pub reviewer_id: String,
    pub reviewer_name: Option<String>,
    #[schema(example = 5)]
    pub rating: u8,
    pub review_text: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewDto {
    fn from_review(review: &StoreReview, reviewer: Option<&User>) -> Self {
        Self {
            id: review.id.to_string(),
            reviewer_id: review.reviewer_id.to_string(),
            reviewer_name: reviewer.map(|u| u.username.clone()),
            rating: review.rating,
            review_text: review.review_text.clone(),
            created_at: review.created_at,
        }
    }
}

impl From<&HydratedReview> for ReviewDto {
    fn from(hydrated: &HydratedReview) -> Self {
        Self::from_review(&hydrated.review, hydrated.reviewer.as_ref())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StoreDto {
    pub owner_id: String,
    #[schema(example = "Rohan Fisheries")]
    pub name: String,
    pub city: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: ImageDto,
}

fn split(coordinates: Option<GeoPoint>) -> (Option<f64>, Option<f64>) {
    match coordinates {
        Some(point) => (Some(point.latitude), Some(point.longitude)),
        None => (None, None),
    }
}

impl From<&User> for StoreDto {
    fn from(owner: &User) -> Self {
        let store = owner.store.as_ref();
        let (latitude, longitude) = split(store.and_then(|s| s.coordinates));
        Self {
            owner_id: owner.id.to_string(),
            name: owner.display_store_name().to_string(),
            city: store.and_then(|s| s.city.clone()),
            location: store.and_then(|s| s.location.clone()),
            address: store.and_then(|s| s.address.clone()),
            latitude,
            longitude,
            image: store
                .map(|s| ImageDto::from(&s.image))
                .unwrap_or_else(|| ImageDto::from(&MediaRef::store_placeholder())),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StoreDirectoryEntryDto {
    #[serde(flatten)]
    pub store: StoreDto,
    pub rating: RatingDto,
    pub product_count: u64,
}

impl From<&StoreDirectoryEntry> for StoreDirectoryEntryDto {
    fn from(entry: &StoreDirectoryEntry) -> Self {
        let (latitude, longitude) = split(entry.coordinates);
        Self {
            store: StoreDto {
                owner_id: entry.owner_id.to_string(),
                name: entry.name.clone(),
                city: entry.city.clone(),
                location: entry.location.clone(),
                address: entry.address.clone(),
                latitude,
                longitude,
                image: ImageDto::from(&entry.image),
            },
            rating: RatingDto::from(entry.rating),
            product_count: entry.product_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StorePageDto {
    pub store: StoreDto,
    pub rating: RatingDto,
    pub products: Vec<ProductDto>,
    pub reviews: Vec<ReviewDto>,
    /// The viewer's own review of this store, if any
    pub viewer_review: Option<ReviewDto>,
}

impl From<&StorePage> for StorePageDto {
    fn from(page: &StorePage) -> Self {
        Self {
            store: StoreDto::from(&page.owner),
            rating: RatingDto::from(page.rating),
            products: page.products.iter().map(ProductDto::from).collect(),
            reviews: page.reviews.iter().map(ReviewDto::from).collect(),
            viewer_review: page
                .viewer_review
                .as_ref()
                .map(|r| ReviewDto::from_review(r, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::DEFAULT_STORE_IMAGE;
    use crate::tests::support::catalog_test_fixtures::{mapped_seller, product, seller};

    #[test]
    fn image_urls_follow_the_reference_kind() {
        let blob = ImageDto::from(&MediaRef::Blob {
            media_id: "media/store-avatar/0b6f/shop.png".to_string(),
        });
        let placeholder = ImageDto::from(&MediaRef::store_placeholder());
        let missing = ImageDto::from(&MediaRef::Missing);

        assert_eq!(blob.kind, "blob");
        assert_eq!(
            blob.media_id.as_deref(),
            Some("media/store-avatar/0b6f/shop.png")
        );
        assert!(blob.url.is_none());
        assert_eq!(
            placeholder.url,
            Some(format!("/static/{}", DEFAULT_STORE_IMAGE))
        );
        assert_eq!(missing.kind, "missing");
        assert!(missing.url.is_none());
    }

    #[test]
    fn seller_without_store_name_shows_username() {
        let mut owner = seller("rohan", "Rohan Fisheries");
        if let Some(store) = owner.store.as_mut() {
            store.name = None;
        }

        assert_eq!(SellerDto::from(&owner).store_name, "rohan");
    }

    #[test]
    fn product_dto_serializes_seller_and_category() {
        let owner = seller("rohan", "Rohan Fisheries");
        let hydrated = HydratedProduct {
            product: product("Prawns", Some(owner.id), None, 1),
            owner: Some(owner),
            category: None,
        };

        let json = serde_json::to_value(ProductDto::from(&hydrated)).unwrap();

        assert_eq!(json["title"], "Prawns");
        assert_eq!(json["seller"]["store_name"], "Rohan Fisheries");
        assert!(json["category"].is_null());
        assert_eq!(json["image"]["kind"], "missing");
    }

    #[test]
    fn store_dto_splits_coordinates() {
        let owner = mapped_seller("anita", "Anita's Spices", 15.27, 73.96);

        let dto = StoreDto::from(&owner);

        assert_eq!(dto.latitude, Some(15.27));
        assert_eq!(dto.longitude, Some(73.96));
    }
}
