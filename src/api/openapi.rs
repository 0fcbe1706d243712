use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Catalog
use crate::modules::catalog::adapter::incoming::web::routes::{
    CategoryDto, CategoryWithCountDto, ImageDto, ProductDto, ProductListDto, RatingDto,
    ReviewDto, SellerDto, StoreDirectoryEntryDto, StoreDto, StorePageDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Amcho Pasro Marketplace API",
        version = "1.0.0",
        description = "Read API for the local marketplace catalog: products, categories, stores and ratings",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Catalog endpoints
        crate::modules::catalog::adapter::incoming::web::routes::list_products_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_product_handler,
        crate::modules::catalog::adapter::incoming::web::routes::list_categories_handler,
        crate::modules::catalog::adapter::incoming::web::routes::resolve_category_handler,

        // Store endpoints
        crate::modules::catalog::adapter::incoming::web::routes::list_stores_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_store_page_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_store_rating_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ProductListDto>,
            ErrorResponse,
            ErrorDetail,

            // Catalog DTOs
            ImageDto,
            CategoryDto,
            CategoryWithCountDto,
            SellerDto,
            ProductDto,
            ProductListDto,
            RatingDto,
            ReviewDto,
            StoreDto,
            StoreDirectoryEntryDto,
            StorePageDto
        )
    ),
    tags(
        (name = "catalog", description = "Products and categories"),
        (name = "stores", description = "Store directory, store pages and ratings"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
