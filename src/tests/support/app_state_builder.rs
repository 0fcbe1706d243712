use actix_web::web;
use std::sync::Arc;

use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::helpers::{
    CategoryResolver, Hydrator, RatingAggregator,
};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetStorePageUseCase, StoreRatingSummaryUseCase,
};
use crate::modules::catalog::application::services::{
    CreateProductService, GetProductService, GetStorePageService, ListCategoriesService,
    ListProductsService, ListStoresService, ResolveCategoryService, StoreRatingSummaryService,
    SubmitStoreReviewService,
};
use crate::shared::clock::{Clock, FixedClock};
use crate::tests::support::catalog_test_fixtures::fixed_now;
use crate::tests::support::in_memory_catalog::InMemoryCatalog;
use crate::AppState;

/// Every catalog use case backed by the real services over one in-memory store.
pub fn catalog_use_cases(catalog: &InMemoryCatalog) -> CatalogUseCases {
    let store = Arc::new(catalog.clone());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));
    let hydrator = Hydrator::new(store.clone(), store.clone());
    let resolver = CategoryResolver::new(store.clone());
    let aggregator = RatingAggregator::new(store.clone());

    CatalogUseCases {
        list_products: Arc::new(ListProductsService::new(
            resolver.clone(),
            store.clone(),
            hydrator.clone(),
            clock.clone(),
        )),
        get_product: Arc::new(GetProductService::new(store.clone(), hydrator.clone())),
        list_categories: Arc::new(ListCategoriesService::new(catalog.clone(), catalog.clone())),
        resolve_category: Arc::new(ResolveCategoryService::new(resolver.clone())),
        rating_summary: Arc::new(StoreRatingSummaryService::new(aggregator.clone())),
        get_store_page: Arc::new(GetStorePageService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            hydrator,
            aggregator.clone(),
        )),
        list_stores: Arc::new(ListStoresService::new(
            store.clone(),
            store.clone(),
            aggregator,
        )),
        submit_review: Arc::new(SubmitStoreReviewService::new(
            catalog.clone(),
            catalog.clone(),
            clock.clone(),
        )),
        create_product: Arc::new(CreateProductService::new(
            store.clone(),
            resolver,
            store,
            clock,
        )),
    }
}

pub struct TestAppStateBuilder {
    catalog: CatalogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            catalog: catalog_use_cases(&InMemoryCatalog::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_catalog(mut self, catalog: &InMemoryCatalog) -> Self {
        self.catalog = catalog_use_cases(catalog);
        self
    }

    pub fn with_rating_summary(
        mut self,
        uc: impl StoreRatingSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.rating_summary = Arc::new(uc);
        self
    }

    pub fn with_get_store_page(
        mut self,
        uc: impl GetStorePageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.get_store_page = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            catalog: self.catalog,
        })
    }
}
