pub mod migration_policy;
