use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::ProductDto;
use crate::modules::catalog::application::ports::incoming::use_cases::GetProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Product detail
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = "catalog",
    params(("product_id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = inline(SuccessResponse<ProductDto>)),
        (
            status = 404,
            description = "Unknown or malformed product id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PRODUCT_NOT_FOUND", "message": "Product not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/products/{product_id}")]
pub async fn get_product_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    match data.catalog.get_product.execute(&raw_id).await {
        Ok(Some(product)) => ApiResponse::success(ProductDto::from(&product)),
        Ok(None) => ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found"),
        Err(err) => map_get_product_error(err),
    }
}

fn map_get_product_error(err: GetProductError) -> HttpResponse {
    match err {
        GetProductError::QueryFailed(msg) => {
            error!("Product lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
