use serde::Serialize;
use std::fmt;

/// What a migrated file is used for. Written into the blob metadata and the
/// object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaUsage {
    StoreAvatar,
    ProductImage,
}

impl MediaUsage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaUsage::StoreAvatar => "store-avatar",
            MediaUsage::ProductImage => "product-image",
        }
    }
}

impl fmt::Display for MediaUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record that still points at a file under the static root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationCandidate {
    /// Hex id of the seller (store avatar) or product document.
    pub record_id: String,
    pub owner_id: Option<String>,
    pub legacy_path: String,
    pub usage: MediaUsage,
}

/// Per-record result of one migration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    Migrated { media_id: String },
    WouldMigrate,
    MissingFile,
    Failed { reason: String },
}

impl MigrationOutcome {
    /// Dry-run and real runs count the same records.
    pub fn is_processed(&self) -> bool {
        matches!(
            self,
            MigrationOutcome::Migrated { .. } | MigrationOutcome::WouldMigrate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MigrationSummary {
    pub stores_processed: u64,
    pub products_processed: u64,
    pub skipped_missing: u64,
    pub failed: u64,
    pub dry_run: bool,
}

impl MigrationSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, usage: MediaUsage, outcome: &MigrationOutcome) {
        if outcome.is_processed() {
            match usage {
                MediaUsage::StoreAvatar => self.stores_processed += 1,
                MediaUsage::ProductImage => self.products_processed += 1,
            }
            return;
        }
        match outcome {
            MigrationOutcome::MissingFile => self.skipped_missing += 1,
            MigrationOutcome::Failed { .. } => self.failed += 1,
            MigrationOutcome::Migrated { .. } | MigrationOutcome::WouldMigrate => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_labels() {
        assert_eq!(MediaUsage::StoreAvatar.as_str(), "store-avatar");
        assert_eq!(MediaUsage::ProductImage.to_string(), "product-image");
    }

    #[test]
    fn summary_counts_processed_records_per_usage() {
        let mut summary = MigrationSummary::new(false);

        summary.record(
            MediaUsage::StoreAvatar,
            &MigrationOutcome::Migrated {
                media_id: "m1".into(),
            },
        );
        summary.record(MediaUsage::ProductImage, &MigrationOutcome::WouldMigrate);
        summary.record(MediaUsage::ProductImage, &MigrationOutcome::MissingFile);
        summary.record(
            MediaUsage::ProductImage,
            &MigrationOutcome::Failed {
                reason: "upload".into(),
            },
        );

        assert_eq!(summary.stores_processed, 1);
        assert_eq!(summary.products_processed, 1);
        assert_eq!(summary.skipped_missing, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn skips_are_not_processed() {
        assert!(MigrationOutcome::WouldMigrate.is_processed());
        assert!(!MigrationOutcome::MissingFile.is_processed());
        assert!(!MigrationOutcome::Failed {
            reason: "upload".into()
        }
        .is_processed());
    }
}
