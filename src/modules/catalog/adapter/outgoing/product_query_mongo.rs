use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use std::collections::HashMap;

use crate::modules::catalog::adapter::outgoing::mongo_documents::{
    decode, entity_id, integer, ProductDocument,
};
use crate::modules::catalog::application::domain::entities::{EntityId, Product};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQueryError, ProductFilter, ProductOrder, ProductQuery,
};
use crate::shared::mongo::PRODUCTS;

#[derive(Clone)]
pub struct ProductQueryMongo {
    products: Collection<Document>,
}

impl ProductQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            products: db.collection(PRODUCTS),
        }
    }

    async fn grouped_counts(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<HashMap<EntityId, u64>, CatalogQueryError> {
        let rows: Vec<Document> = self
            .products
            .aggregate(pipeline)
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(parse_counts(rows))
    }
}

// ============================================================================
// Query builders
// ============================================================================

/// Store-side filter. Text is matched as an escaped, case-insensitive regex so
/// user input is always a literal substring.
pub(super) fn product_filter(filter: &ProductFilter) -> Document {
    let mut query = Document::new();

    if let Some(category_id) = filter.category_id {
        query.insert("category_id", category_id.as_object_id());
    }
    if let Some(owner_id) = filter.owner_id {
        query.insert("user_id", owner_id.as_object_id());
    }
    if let Some(text) = filter.text.as_deref() {
        let pattern = doc! { "$regex": regex::escape(text), "$options": "i" };
        query.insert(
            "$or",
            vec![
                doc! { "title": pattern.clone() },
                doc! { "description": pattern },
            ],
        );
    }

    query
}

pub(super) fn count_by_category_pipeline() -> Vec<Document> {
    vec![
        doc! { "$match": { "category_id": { "$ne": null } } },
        doc! { "$group": { "_id": "$category_id", "count": { "$sum": 1 } } },
    ]
}

pub(super) fn count_by_owner_pipeline(owner_ids: &[EntityId]) -> Vec<Document> {
    let oids: Vec<ObjectId> = owner_ids.iter().map(EntityId::as_object_id).collect();
    vec![
        doc! { "$match": { "user_id": { "$in": oids } } },
        doc! { "$group": { "_id": "$user_id", "count": { "$sum": 1 } } },
    ]
}

fn parse_counts(rows: Vec<Document>) -> HashMap<EntityId, u64> {
    rows.iter()
        .filter_map(|row| {
            let id = entity_id(row.get("_id"))?;
            let count = integer(row.get("count")).and_then(|c| u64::try_from(c).ok())?;
            Some((id, count))
        })
        .collect()
}

// ============================================================================
// Port implementation
// ============================================================================

#[async_trait]
impl ProductQuery for ProductQueryMongo {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Product>, CatalogQueryError> {
        let found = self
            .products
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(map_db_err)?;

        match found {
            None => Ok(None),
            Some(d) => decode::<ProductDocument>(PRODUCTS, d)
                .map(|p| Some(p.into_entity()))
                .ok_or_else(|| CatalogQueryError::MalformedDocument(format!("products/{}", id))),
        }
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let mut action = self.products.find(product_filter(filter));
        if order == ProductOrder::NewestFirst {
            action = action.sort(doc! { "created_at": -1 });
        }

        let docs: Vec<Document> = action
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(docs
            .into_iter()
            .filter_map(|d| decode::<ProductDocument>(PRODUCTS, d))
            .map(ProductDocument::into_entity)
            .collect())
    }

    async fn count_by_category(&self) -> Result<HashMap<EntityId, u64>, CatalogQueryError> {
        self.grouped_counts(count_by_category_pipeline()).await
    }

    async fn count_by_owner(
        &self,
        owner_ids: &[EntityId],
    ) -> Result<HashMap<EntityId, u64>, CatalogQueryError> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }
        self.grouped_counts(count_by_owner_pipeline(owner_ids)).await
    }
}

fn map_db_err(e: mongodb::error::Error) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}
