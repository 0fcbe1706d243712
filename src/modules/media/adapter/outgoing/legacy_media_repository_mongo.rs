use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};

use crate::modules::catalog::application::domain::entities::{
    DEFAULT_STORE_IMAGE, LEGACY_DEFAULT_STORE_IMAGE,
};
use crate::modules::media::application::domain::entities::{MediaUsage, MigrationCandidate};
use crate::modules::media::application::ports::outgoing::{
    LegacyMediaRepository, LegacyMediaRepositoryError,
};
use crate::shared::mongo::{PRODUCTS, USERS};

/// Field layout of one usage: where the legacy path lives, where the blob
/// reference goes, and which field names the owner.
struct MediaFields {
    collection: &'static str,
    legacy: &'static str,
    blob: &'static str,
    owner: &'static str,
}

fn fields(usage: MediaUsage) -> MediaFields {
    match usage {
        MediaUsage::StoreAvatar => MediaFields {
            collection: USERS,
            legacy: "store_image",
            blob: "store_image_media_id",
            owner: "_id",
        },
        MediaUsage::ProductImage => MediaFields {
            collection: PRODUCTS,
            legacy: "image_filename",
            blob: "image_media_id",
            owner: "user_id",
        },
    }
}

#[derive(Clone)]
pub struct LegacyMediaRepositoryMongo {
    db: Database,
}

impl LegacyMediaRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self, usage: MediaUsage) -> Collection<Document> {
        self.db.collection(fields(usage).collection)
    }
}

// ============================================================================
// Query builders
// ============================================================================

/// Records with a legacy path and no blob reference. Placeholder store images
/// are excluded.
pub(super) fn candidate_filter(usage: MediaUsage) -> Document {
    match usage {
        MediaUsage::StoreAvatar => doc! {
            "user_type": "seller",
            "store_image_media_id": { "$exists": false },
            "store_image": {
                "$nin": [Bson::Null, "", DEFAULT_STORE_IMAGE, LEGACY_DEFAULT_STORE_IMAGE]
            },
        },
        MediaUsage::ProductImage => doc! {
            "image_media_id": { "$exists": false },
            "image_filename": { "$nin": [Bson::Null, ""] },
        },
    }
}

/// Sets the blob reference and drops the legacy path in the same update.
pub(super) fn migration_update(usage: MediaUsage, media_id: &str) -> Document {
    let f = fields(usage);
    doc! {
        "$set": { f.blob: media_id },
        "$unset": { f.legacy: "" },
    }
}

fn hex_id(value: Option<&Bson>) -> Option<String> {
    match value? {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn to_candidate(usage: MediaUsage, document: &Document) -> Option<MigrationCandidate> {
    let f = fields(usage);
    let record_id = hex_id(document.get("_id"))?;
    let legacy_path = document.get_str(f.legacy).ok()?.to_string();

    Some(MigrationCandidate {
        record_id,
        owner_id: hex_id(document.get(f.owner)),
        legacy_path,
        usage,
    })
}

// ============================================================================
// Port implementation
// ============================================================================

#[async_trait]
impl LegacyMediaRepository for LegacyMediaRepositoryMongo {
    async fn find_candidates(
        &self,
        usage: MediaUsage,
    ) -> Result<Vec<MigrationCandidate>, LegacyMediaRepositoryError> {
        let f = fields(usage);
        let docs: Vec<Document> = self
            .collection(usage)
            .find(candidate_filter(usage))
            .projection(doc! { "_id": 1, f.legacy: 1, f.owner: 1 })
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        Ok(docs
            .iter()
            .filter_map(|d| {
                let candidate = to_candidate(usage, d);
                if candidate.is_none() {
                    tracing::warn!(
                        collection = f.collection,
                        id = ?d.get("_id"),
                        "Ignoring record with unreadable legacy path"
                    );
                }
                candidate
            })
            .collect())
    }

    async fn mark_migrated(
        &self,
        candidate: &MigrationCandidate,
        media_id: &str,
    ) -> Result<(), LegacyMediaRepositoryError> {
        let oid = ObjectId::parse_str(&candidate.record_id)
            .map_err(|_| LegacyMediaRepositoryError::InvalidRecordId(candidate.record_id.clone()))?;

        self.collection(candidate.usage)
            .update_one(
                doc! { "_id": oid },
                migration_update(candidate.usage, media_id),
            )
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: mongodb::error::Error) -> LegacyMediaRepositoryError {
    LegacyMediaRepositoryError::DatabaseError(e.to_string())
}
