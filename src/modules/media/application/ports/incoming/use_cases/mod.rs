mod migrate_media;

pub use migrate_media::{MigrateMediaError, MigrateMediaUseCase};
