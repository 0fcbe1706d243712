use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::modules::catalog::adapter::outgoing::mongo_documents::to_bson_datetime;
use crate::modules::catalog::application::ports::outgoing::{
    ReviewRepository, ReviewRepositoryError, ReviewUpsert, UpsertOutcome,
};
use crate::shared::mongo::STORE_REVIEWS;

#[derive(Clone)]
pub struct ReviewRepositoryMongo {
    reviews: Collection<Document>,
}

impl ReviewRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            reviews: db.collection(STORE_REVIEWS),
        }
    }
}

pub(super) fn pair_filter(review: &ReviewUpsert) -> Document {
    doc! {
        "store_owner_id": review.store_owner_id.as_object_id(),
        "reviewer_id": review.reviewer_id.as_object_id(),
    }
}

/// The submission time replaces `created_at` on every write.
pub(super) fn review_update(review: &ReviewUpsert) -> Document {
    doc! {
        "$set": {
            "rating": i32::from(review.rating),
            "review_text": &review.review_text,
            "created_at": to_bson_datetime(review.submitted_at),
        }
    }
}

/// E11000 is the server's duplicate key code.
fn is_duplicate_key(message: &str) -> bool {
    message.contains("E11000") || message.contains("duplicate key")
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryMongo {
    async fn upsert(&self, review: &ReviewUpsert) -> Result<UpsertOutcome, ReviewRepositoryError> {
        let result = self
            .reviews
            .update_one(pair_filter(review), review_update(review))
            .upsert(true)
            .await
            .map_err(map_db_err)?;

        if result.upserted_id.is_some() {
            Ok(UpsertOutcome::Created)
        } else {
            Ok(UpsertOutcome::Updated)
        }
    }

    async fn update_existing(&self, review: &ReviewUpsert) -> Result<(), ReviewRepositoryError> {
        self.reviews
            .update_one(pair_filter(review), review_update(review))
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(e: mongodb::error::Error) -> ReviewRepositoryError {
    let message = e.to_string();
    if is_duplicate_key(&message) {
        return ReviewRepositoryError::DuplicateReview;
    }
    ReviewRepositoryError::DatabaseError(message)
}
