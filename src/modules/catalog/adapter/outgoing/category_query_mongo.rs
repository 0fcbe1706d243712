use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use super::user_query_mongo::ids_filter;
use crate::modules::catalog::adapter::outgoing::mongo_documents::{decode, CategoryDocument};
use crate::modules::catalog::application::domain::entities::{Category, EntityId};
use crate::modules::catalog::application::ports::outgoing::{CatalogQueryError, CategoryQuery};
use crate::shared::mongo::CATEGORIES;

#[derive(Clone)]
pub struct CategoryQueryMongo {
    categories: Collection<Document>,
}

impl CategoryQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            categories: db.collection(CATEGORIES),
        }
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Category>, CatalogQueryError> {
        let found = self
            .categories
            .find_one(filter)
            .await
            .map_err(map_db_err)?;

        Ok(found
            .and_then(|d| decode::<CategoryDocument>(CATEGORIES, d))
            .map(CategoryDocument::into_entity))
    }

    async fn find_all(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> Result<Vec<Category>, CatalogQueryError> {
        let mut action = self.categories.find(filter);
        if let Some(sort) = sort {
            action = action.sort(sort);
        }
        let docs: Vec<Document> = action
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(docs
            .into_iter()
            .filter_map(|d| decode::<CategoryDocument>(CATEGORIES, d))
            .map(CategoryDocument::into_entity)
            .collect())
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryMongo {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, CatalogQueryError> {
        self.find_one(doc! { "_id": id.as_object_id() }).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogQueryError> {
        if slug.is_empty() {
            return Ok(None);
        }
        self.find_one(doc! { "slug": slug }).await
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Category>, CatalogQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_all(ids_filter(ids), None).await
    }

    async fn list_all(&self) -> Result<Vec<Category>, CatalogQueryError> {
        self.find_all(doc! {}, Some(doc! { "name": 1 })).await
    }
}

fn map_db_err(e: mongodb::error::Error) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}
