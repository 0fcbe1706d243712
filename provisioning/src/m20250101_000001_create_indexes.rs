use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};

use marketplace_backend::shared::mongo::{CATEGORIES, PRODUCTS, STORE_REVIEWS, USERS};

use crate::ProvisioningStep;

pub struct Migration;

/// (collection, keys, unique)
pub(crate) fn index_plan() -> Vec<(&'static str, Document, bool)> {
    vec![
        // =====================================================
        // users
        // =====================================================
        (USERS, doc! { "email_lower": 1 }, true),
        (USERS, doc! { "user_type": 1 }, false),
        // =====================================================
        // categories
        // =====================================================
        (CATEGORIES, doc! { "slug": 1 }, true),
        // =====================================================
        // products
        // =====================================================
        (PRODUCTS, doc! { "created_at": -1 }, false),
        (PRODUCTS, doc! { "user_id": 1 }, false),
        (PRODUCTS, doc! { "category_id": 1 }, false),
        // =====================================================
        // store_reviews: one review per reviewer per store
        // =====================================================
        (
            STORE_REVIEWS,
            doc! { "store_owner_id": 1, "reviewer_id": 1 },
            true,
        ),
    ]
}

#[async_trait]
impl ProvisioningStep for Migration {
    fn name(&self) -> &'static str {
        "m20250101_000001_create_indexes"
    }

    async fn up(&self, db: &Database) -> Result<(), mongodb::error::Error> {
        for (collection, keys, unique) in index_plan() {
            let model = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(unique).build())
                .build();
            let created = db
                .collection::<Document>(collection)
                .create_index(model)
                .await?;
            tracing::info!(collection, index = %created.index_name, "Index ensured");
        }
        Ok(())
    }
}
