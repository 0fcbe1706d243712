pub mod app_state_builder;
pub mod catalog_test_fixtures;
pub mod in_memory_catalog;
pub mod stubs;
