mod category_query;
mod product_query;
mod product_repository;
mod query_error;
mod review_query;
mod review_repository;
mod user_query;

pub use category_query::CategoryQuery;
pub use product_query::{ProductFilter, ProductOrder, ProductQuery};
pub use product_repository::{NewProduct, ProductRepository, ProductRepositoryError};
pub use query_error::CatalogQueryError;
pub use review_query::{ReviewQuery, ReviewQueryError};
pub use review_repository::{ReviewRepository, ReviewRepositoryError, ReviewUpsert, UpsertOutcome};
pub use user_query::UserQuery;
