use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use marketplace_backend::shared::mongo::CATEGORIES;

use crate::ProvisioningStep;

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Seafood",
    "Handicrafts",
    "Spices",
    "Organic Produce",
    "Beverages",
    "Art",
    "Clothing",
    "Other",
];

pub struct Migration;

pub(crate) fn slug_for(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Inserts the category when its slug is free; an existing one is left untouched.
pub(crate) fn seed_upsert(name: &str) -> (Document, Document) {
    let slug = slug_for(name);
    (
        doc! { "slug": slug.as_str() },
        doc! { "$setOnInsert": { "name": name, "slug": slug.as_str() } },
    )
}

#[async_trait]
impl ProvisioningStep for Migration {
    fn name(&self) -> &'static str {
        "m20250101_000002_seed_categories"
    }

    async fn up(&self, db: &Database) -> Result<(), mongodb::error::Error> {
        let categories = db.collection::<Document>(CATEGORIES);
        let mut inserted = 0;

        for name in DEFAULT_CATEGORIES {
            let (filter, update) = seed_upsert(name);
            let result = categories.update_one(filter, update).upsert(true).await?;
            if result.upserted_id.is_some() {
                inserted += 1;
            }
        }

        tracing::info!(
            inserted,
            total = DEFAULT_CATEGORIES.len(),
            "Default categories seeded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        assert_eq!(slug_for("Organic Produce"), "organic-produce");
        assert_eq!(slug_for("Seafood"), "seafood");
    }

    #[test]
    fn upsert_only_writes_on_insert() {
        let (filter, update) = seed_upsert("Organic Produce");

        assert_eq!(filter, doc! { "slug": "organic-produce" });
        assert_eq!(
            update,
            doc! { "$setOnInsert": { "name": "Organic Produce", "slug": "organic-produce" } }
        );
    }
}
