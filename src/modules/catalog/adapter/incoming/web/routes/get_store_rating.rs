use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::RatingDto;
use crate::modules::catalog::application::domain::entities::EntityId;
use crate::modules::catalog::application::ports::incoming::use_cases::StoreRatingSummaryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Store rating summary
///
/// Average rounded to one decimal; `null` when the store has no reviews.
#[utoipa::path(
    get,
    path = "/api/stores/{owner_id}/rating",
    tag = "stores",
    params(("owner_id" = String, Path, description = "Store owner identifier")),
    responses(
        (
            status = 200,
            description = "Rating summary",
            body = inline(SuccessResponse<RatingDto>),
            example = json!({ "success": true, "data": { "average": 4.3, "count": 3 } })
        ),
        (status = 404, description = "Malformed owner id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/stores/{owner_id}/rating")]
pub async fn get_store_rating_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(owner_id) = EntityId::parse(&path.into_inner()) else {
        return ApiResponse::not_found("STORE_NOT_FOUND", "Store not found");
    };

    match data.catalog.rating_summary.execute(owner_id).await {
        Ok(summary) => ApiResponse::success(RatingDto::from(summary)),
        Err(err) => map_rating_error(err),
    }
}

fn map_rating_error(err: StoreRatingSummaryError) -> HttpResponse {
    match err {
        StoreRatingSummaryError::QueryFailed(msg) => {
            error!("Rating summary failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
