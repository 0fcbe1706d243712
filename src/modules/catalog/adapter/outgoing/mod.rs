mod category_query_mongo;
pub mod mongo_documents;
mod product_query_mongo;
mod product_repository_mongo;
mod review_query_mongo;
mod review_repository_mongo;
mod user_query_mongo;

pub use category_query_mongo::CategoryQueryMongo;
pub use product_query_mongo::ProductQueryMongo;
pub use product_repository_mongo::ProductRepositoryMongo;
pub use review_query_mongo::ReviewQueryMongo;
pub use review_repository_mongo::ReviewRepositoryMongo;
pub use user_query_mongo::UserQueryMongo;
