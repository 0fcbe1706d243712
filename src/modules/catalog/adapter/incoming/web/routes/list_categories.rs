use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::CategoryWithCountDto;
use crate::modules::catalog::application::ports::incoming::use_cases::ListCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Category catalogue
///
/// Sorted by name, each with its product count.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Categories", body = inline(SuccessResponse<Vec<CategoryWithCountDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_categories.execute().await {
        Ok(categories) => ApiResponse::success(
            categories
                .iter()
                .map(CategoryWithCountDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_categories_error(err),
    }
}

fn map_list_categories_error(err: ListCategoriesError) -> HttpResponse {
    match err {
        ListCategoriesError::QueryFailed(msg) => {
            error!("Category listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
