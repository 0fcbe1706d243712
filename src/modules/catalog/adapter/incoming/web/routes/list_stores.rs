use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::StoreDirectoryEntryDto;
use crate::modules::catalog::application::ports::incoming::use_cases::ListStoresError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListStoresParams {
    /// Only stores with both coordinates set
    #[param(example = true)]
    pub mapped: Option<bool>,
}

/// Store directory
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "stores",
    params(ListStoresParams),
    responses(
        (status = 200, description = "Stores", body = inline(SuccessResponse<Vec<StoreDirectoryEntryDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/stores")]
pub async fn list_stores_handler(
    params: web::Query<ListStoresParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let only_mapped = params.mapped.unwrap_or(false);

    match data.catalog.list_stores.execute(only_mapped).await {
        Ok(stores) => ApiResponse::success(
            stores
                .iter()
                .map(StoreDirectoryEntryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_stores_error(err),
    }
}

fn map_list_stores_error(err: ListStoresError) -> HttpResponse {
    match err {
        ListStoresError::QueryFailed(msg) => {
            error!("Store directory failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
