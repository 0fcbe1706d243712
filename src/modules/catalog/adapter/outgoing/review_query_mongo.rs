use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};
use std::collections::HashMap;

use crate::modules::catalog::adapter::outgoing::mongo_documents::{
    decode, entity_id, integer, StoreReviewDocument,
};
use crate::modules::catalog::application::domain::entities::{EntityId, StoreReview};
use crate::modules::catalog::application::domain::rating::RatingStats;
use crate::modules::catalog::application::ports::outgoing::{ReviewQuery, ReviewQueryError};
use crate::shared::mongo::STORE_REVIEWS;

#[derive(Clone)]
pub struct ReviewQueryMongo {
    reviews: Collection<Document>,
}

impl ReviewQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            reviews: db.collection(STORE_REVIEWS),
        }
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, ReviewQueryError> {
        self.reviews
            .aggregate(pipeline)
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Pipelines
// ============================================================================

pub(super) fn average_pipeline(store_owner_id: EntityId) -> Vec<Document> {
    vec![
        doc! { "$match": { "store_owner_id": store_owner_id.as_object_id() } },
        doc! { "$group": { "_id": Bson::Null, "average": { "$avg": "$rating" } } },
    ]
}

pub(super) fn stats_pipeline(store_owner_ids: &[EntityId]) -> Vec<Document> {
    let oids: Vec<ObjectId> = store_owner_ids
        .iter()
        .map(EntityId::as_object_id)
        .collect();
    vec![
        doc! { "$match": { "store_owner_id": { "$in": oids } } },
        doc! {
            "$group": {
                "_id": "$store_owner_id",
                "average": { "$avg": "$rating" },
                "count": { "$sum": 1 },
            }
        },
    ]
}

fn number(value: Option<&Bson>) -> Option<f64> {
    match value? {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

fn parse_stats(rows: &[Document]) -> HashMap<EntityId, RatingStats> {
    rows.iter()
        .filter_map(|row| {
            let id = entity_id(row.get("_id"))?;
            let count = integer(row.get("count")).and_then(|c| u64::try_from(c).ok())?;
            Some((
                id,
                RatingStats {
                    average: number(row.get("average")),
                    count,
                },
            ))
        })
        .collect()
}

fn into_reviews(docs: Vec<Document>) -> Vec<StoreReview> {
    docs.into_iter()
        .filter_map(|d| decode::<StoreReviewDocument>(STORE_REVIEWS, d))
        .filter_map(StoreReviewDocument::into_entity)
        .collect()
}

// ============================================================================
// Port implementation
// ============================================================================

#[async_trait]
impl ReviewQuery for ReviewQueryMongo {
    async fn average_rating(
        &self,
        store_owner_id: EntityId,
    ) -> Result<Option<f64>, ReviewQueryError> {
        let rows = self.aggregate(average_pipeline(store_owner_id)).await?;
        Ok(rows.first().and_then(|row| number(row.get("average"))))
    }

    async fn count_for_store(&self, store_owner_id: EntityId) -> Result<u64, ReviewQueryError> {
        self.reviews
            .count_documents(doc! { "store_owner_id": store_owner_id.as_object_id() })
            .await
            .map_err(map_db_err)
    }

    async fn list_for_store(
        &self,
        store_owner_id: EntityId,
    ) -> Result<Vec<StoreReview>, ReviewQueryError> {
        let docs: Vec<Document> = self
            .reviews
            .find(doc! { "store_owner_id": store_owner_id.as_object_id() })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(into_reviews(docs))
    }

    async fn rating_stats_by_store(
        &self,
        store_owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, RatingStats>, ReviewQueryError> {
        if store_owner_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = self.aggregate(stats_pipeline(store_owner_ids)).await?;
        Ok(parse_stats(&rows))
    }
}

fn map_db_err(e: mongodb::error::Error) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}
