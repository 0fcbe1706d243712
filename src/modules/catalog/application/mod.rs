pub mod catalog_use_cases;
pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;
