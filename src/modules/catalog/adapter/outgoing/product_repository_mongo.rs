use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Collection, Database};

use crate::modules::catalog::adapter::outgoing::mongo_documents::to_bson_datetime;
use crate::modules::catalog::application::domain::entities::{EntityId, MediaRef, Product};
use crate::modules::catalog::application::ports::outgoing::{
    NewProduct, ProductRepository, ProductRepositoryError,
};
use crate::shared::mongo::PRODUCTS;

#[derive(Clone)]
pub struct ProductRepositoryMongo {
    products: Collection<Document>,
}

impl ProductRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            products: db.collection(PRODUCTS),
        }
    }
}

pub(super) fn product_document(product: &NewProduct) -> Document {
    let category_id = product
        .category_id
        .map(|id| Bson::ObjectId(id.as_object_id()))
        .unwrap_or(Bson::Null);

    doc! {
        "title": &product.title,
        "price": product.price,
        "quantity": i64::from(product.quantity),
        "description": &product.description,
        "image_filename": Bson::Null,
        "user_id": product.owner_id.as_object_id(),
        "category_id": category_id,
        "created_at": to_bson_datetime(product.created_at),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductRepositoryError> {
        let result = self
            .products
            .insert_one(product_document(&product))
            .await
            .map_err(map_db_err)?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(EntityId::from)
            .ok_or_else(|| {
                ProductRepositoryError::DatabaseError("insert returned a non-ObjectId key".into())
            })?;

        Ok(Product {
            id,
            title: product.title,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            image: MediaRef::Missing,
            owner_id: Some(product.owner_id),
            category_id: product.category_id,
            created_at: Some(product.created_at),
        })
    }
}

fn map_db_err(e: mongodb::error::Error) -> ProductRepositoryError {
    ProductRepositoryError::DatabaseError(e.to_string())
}
