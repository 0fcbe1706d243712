pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogUseCases,
}
