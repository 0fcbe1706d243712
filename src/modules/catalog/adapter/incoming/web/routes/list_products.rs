use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::ProductListDto;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    ListProductsError, ListProductsQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProductsParams {
    /// Category identifier or slug. Unknown values are ignored.
    #[param(example = "seafood")]
    pub category: Option<String>,
    /// Case-insensitive text matched against title and description
    #[param(example = "prawn")]
    pub q: Option<String>,
}

/// Product listing
///
/// Newest first, or ranked by relevance when `q` is given.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    params(ListProductsParams),
    responses(
        (status = 200, description = "Products found", body = inline(SuccessResponse<ProductListDto>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/products")]
pub async fn list_products_handler(
    params: web::Query<ListProductsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ListProductsQuery {
        category: params.category,
        text: params.q,
    };

    match data.catalog.list_products.execute(query).await {
        Ok(listing) => ApiResponse::success(ProductListDto::from(&listing)),
        Err(err) => map_list_products_error(err),
    }
}

fn map_list_products_error(err: ListProductsError) -> HttpResponse {
    match err {
        ListProductsError::QueryFailed(msg) => {
            error!("Product listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
