use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, GetProductUseCase, GetStorePageUseCase, ListCategoriesUseCase,
    ListProductsUseCase, ListStoresUseCase, ResolveCategoryUseCase, StoreRatingSummaryUseCase,
    SubmitStoreReviewUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_products: Arc<dyn ListProductsUseCase + Send + Sync>,
    pub get_product: Arc<dyn GetProductUseCase + Send + Sync>,
    pub list_categories: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub resolve_category: Arc<dyn ResolveCategoryUseCase + Send + Sync>,
    pub rating_summary: Arc<dyn StoreRatingSummaryUseCase + Send + Sync>,
    pub get_store_page: Arc<dyn GetStorePageUseCase + Send + Sync>,
    pub list_stores: Arc<dyn ListStoresUseCase + Send + Sync>,
    pub submit_review: Arc<dyn SubmitStoreReviewUseCase + Send + Sync>,
    pub create_product: Arc<dyn CreateProductUseCase + Send + Sync>,
}
