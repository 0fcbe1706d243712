mod create_product_service;
mod get_product_service;
mod get_store_page_service;
mod list_categories_service;
mod list_products_service;
mod list_stores_service;
mod resolve_category_service;
mod store_rating_summary_service;
mod submit_store_review_service;

pub use create_product_service::CreateProductService;
pub use get_product_service::GetProductService;
pub use get_store_page_service::GetStorePageService;
pub use list_categories_service::ListCategoriesService;
pub use list_products_service::ListProductsService;
pub use list_stores_service::ListStoresService;
pub use resolve_category_service::ResolveCategoryService;
pub use store_rating_summary_service::StoreRatingSummaryService;
pub use submit_store_review_service::SubmitStoreReviewService;
