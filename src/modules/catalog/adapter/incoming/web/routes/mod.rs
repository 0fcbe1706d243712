mod dto;
mod get_product;
mod get_store_page;
mod get_store_rating;
mod list_categories;
mod list_products;
mod list_stores;
mod resolve_category;

pub use dto::{
    CategoryDto, CategoryWithCountDto, ImageDto, ProductDto, ProductListDto, RatingDto,
    ReviewDto, SellerDto, StoreDirectoryEntryDto, StoreDto, StorePageDto,
};
pub use get_product::{__path_get_product_handler, get_product_handler};
pub use get_store_page::{__path_get_store_page_handler, get_store_page_handler};
pub use get_store_rating::{__path_get_store_rating_handler, get_store_rating_handler};
pub use list_categories::{__path_list_categories_handler, list_categories_handler};
pub use list_products::{__path_list_products_handler, list_products_handler};
pub use list_stores::{__path_list_stores_handler, list_stores_handler};
pub use resolve_category::{__path_resolve_category_handler, resolve_category_handler};
