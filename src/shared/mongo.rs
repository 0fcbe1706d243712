use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use std::time::Duration;

use crate::shared::config::MongoConfig;

pub const USERS: &str = "users";
pub const CATEGORIES: &str = "categories";
pub const PRODUCTS: &str = "products";
pub const STORE_REVIEWS: &str = "store_reviews";

/// Opens the client and verifies the server answers a ping. A store that cannot
/// be reached at startup is the one fatal condition of the application.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some("marketplace_backend".to_string());
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    let client = Client::with_options(options)?;
    let db = client.database(&config.db_name);
    ping(&db).await?;

    tracing::info!(db = %config.db_name, "MongoDB connection established");
    Ok(db)
}

pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
