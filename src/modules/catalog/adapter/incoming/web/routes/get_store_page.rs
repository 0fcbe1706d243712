use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::StorePageDto;
use crate::modules::catalog::application::domain::entities::EntityId;
use crate::modules::catalog::application::ports::incoming::use_cases::GetStorePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StorePageParams {
    /// User viewing the page; their own review is returned separately
    pub viewer: Option<String>,
}

/// Store page
///
/// Owner profile, products and reviews newest first, and the rating summary.
#[utoipa::path(
    get,
    path = "/api/stores/{owner_id}",
    tag = "stores",
    params(
        ("owner_id" = String, Path, description = "Store owner identifier"),
        StorePageParams
    ),
    responses(
        (status = 200, description = "Store page", body = inline(SuccessResponse<StorePageDto>)),
        (
            status = 400,
            description = "User exists but is not a seller",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "NOT_A_SELLER", "message": "This user does not run a store" }
            })
        ),
        (status = 404, description = "Unknown or malformed owner id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/stores/{owner_id}")]
pub async fn get_store_page_handler(
    path: web::Path<String>,
    params: web::Query<StorePageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_owner_id = path.into_inner();
    let viewer = params.viewer.as_deref().and_then(EntityId::parse);

    match data
        .catalog
        .get_store_page
        .execute(&raw_owner_id, viewer)
        .await
    {
        Ok(page) => ApiResponse::success(StorePageDto::from(&page)),
        Err(err) => map_get_store_page_error(err),
    }
}

fn map_get_store_page_error(err: GetStorePageError) -> HttpResponse {
    match err {
        GetStorePageError::StoreNotFound => {
            ApiResponse::not_found("STORE_NOT_FOUND", "Store not found")
        }
        GetStorePageError::NotASeller => {
            ApiResponse::bad_request("NOT_A_SELLER", "This user does not run a store")
        }
        GetStorePageError::QueryFailed(msg) => {
            error!("Store page failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
