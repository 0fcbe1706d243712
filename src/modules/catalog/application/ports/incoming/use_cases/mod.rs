mod create_product;
mod get_product;
mod get_store_page;
mod list_categories;
mod list_products;
mod list_stores;
mod resolve_category;
mod store_rating_summary;
mod submit_store_review;

pub use create_product::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use get_product::{GetProductError, GetProductUseCase};
pub use get_store_page::{GetStorePageError, GetStorePageUseCase, StorePage};
pub use list_categories::{CategoryWithCount, ListCategoriesError, ListCategoriesUseCase};
pub use list_products::{ListProductsError, ListProductsQuery, ListProductsUseCase, ProductListing};
pub use list_stores::{ListStoresError, ListStoresUseCase, StoreDirectoryEntry};
pub use resolve_category::{ResolveCategoryError, ResolveCategoryUseCase};
pub use store_rating_summary::{StoreRatingSummaryError, StoreRatingSummaryUseCase};
pub use submit_store_review::{
    SubmitStoreReviewCommand, SubmitStoreReviewError, SubmitStoreReviewUseCase,
};
