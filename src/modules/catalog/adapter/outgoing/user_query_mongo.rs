use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::modules::catalog::adapter::outgoing::mongo_documents::{decode, UserDocument};
use crate::modules::catalog::application::domain::entities::{EntityId, User};
use crate::modules::catalog::application::ports::outgoing::{CatalogQueryError, UserQuery};
use crate::shared::mongo::USERS;

#[derive(Clone)]
pub struct UserQueryMongo {
    users: Collection<Document>,
}

impl UserQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS),
        }
    }

    async fn find_all(&self, filter: Document) -> Result<Vec<User>, CatalogQueryError> {
        let docs: Vec<Document> = self
            .users
            .find(filter)
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(docs
            .into_iter()
            .filter_map(|d| decode::<UserDocument>(USERS, d))
            .map(UserDocument::into_entity)
            .collect())
    }
}

pub(super) fn ids_filter(ids: &[EntityId]) -> Document {
    let oids: Vec<ObjectId> = ids.iter().map(EntityId::as_object_id).collect();
    doc! { "_id": { "$in": oids } }
}

#[async_trait]
impl UserQuery for UserQueryMongo {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, CatalogQueryError> {
        let found = self
            .users
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(map_db_err)?;

        match found {
            None => Ok(None),
            Some(d) => decode::<UserDocument>(USERS, d)
                .map(|u| Some(u.into_entity()))
                .ok_or_else(|| CatalogQueryError::MalformedDocument(format!("users/{}", id))),
        }
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<User>, CatalogQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_all(ids_filter(ids)).await
    }

    async fn list_sellers(&self) -> Result<Vec<User>, CatalogQueryError> {
        self.find_all(doc! { "user_type": "seller" }).await
    }
}

fn map_db_err(e: mongodb::error::Error) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}
