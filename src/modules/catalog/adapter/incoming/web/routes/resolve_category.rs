use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::adapter::incoming::web::routes::dto::CategoryDto;
use crate::modules::catalog::application::ports::incoming::use_cases::ResolveCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Resolve a category by identifier or slug
#[utoipa::path(
    get,
    path = "/api/categories/{reference}",
    tag = "catalog",
    params(("reference" = String, Path, description = "Category identifier or slug")),
    responses(
        (status = 200, description = "Category found", body = inline(SuccessResponse<CategoryDto>)),
        (status = 404, description = "No category matches", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/categories/{reference}")]
pub async fn resolve_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let reference = path.into_inner();

    match data.catalog.resolve_category.execute(&reference).await {
        Ok(Some(category)) => ApiResponse::success(CategoryDto::from(&category)),
        Ok(None) => ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found"),
        Err(err) => map_resolve_category_error(err),
    }
}

fn map_resolve_category_error(err: ResolveCategoryError) -> HttpResponse {
    match err {
        ResolveCategoryError::QueryFailed(msg) => {
            error!("Category resolution failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, catalog_test_fixtures::category,
        in_memory_catalog::InMemoryCatalog,
    };

    #[actix_web::test]
    async fn resolves_by_id_and_by_slug() {
        let beverages = category("Beverages", "beverages");
        let catalog = InMemoryCatalog::new().with_categories([beverages.clone()]);
        let state = TestAppStateBuilder::default().with_catalog(&catalog).build();
        let app =
            test::init_service(App::new().app_data(state).service(resolve_category_handler)).await;

        for uri in [
            format!("/api/categories/{}", beverages.id),
            "/api/categories/beverages".to_string(),
        ] {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            let body = test::read_body(resp).await;
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["data"]["id"], beverages.id.to_string());
        }
    }

    #[actix_web::test]
    async fn unknown_reference_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let state = TestAppStateBuilder::default().with_catalog(&catalog).build();
        let app =
            test::init_service(App::new().app_data(state).service(resolve_category_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/categories/jewellery")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
