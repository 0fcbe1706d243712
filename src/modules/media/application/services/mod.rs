mod migrate_media_service;

pub use migrate_media_service::MigrateMediaService;
