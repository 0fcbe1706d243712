use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_backend::modules::catalog::adapter::incoming::web::routes as catalog_routes;
use marketplace_backend::modules::catalog::adapter::outgoing::{
    CategoryQueryMongo, ProductQueryMongo, ProductRepositoryMongo, ReviewQueryMongo,
    ReviewRepositoryMongo, UserQueryMongo,
};
use marketplace_backend::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use marketplace_backend::modules::catalog::application::helpers::{
    CategoryResolver, Hydrator, RatingAggregator,
};
use marketplace_backend::modules::catalog::application::services::{
    CreateProductService, GetProductService, GetStorePageService, ListCategoriesService,
    ListProductsService, ListStoresService, ResolveCategoryService, StoreRatingSummaryService,
    SubmitStoreReviewService,
};
use marketplace_backend::shared::clock::{Clock, SystemClock};
use marketplace_backend::shared::config::{load_env_files, AppConfig};
use marketplace_backend::shared::mongo;
use marketplace_backend::{api, health, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = mongo::connect(&config.mongo).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to MongoDB");
        std::io::Error::other(e)
    })?;

    // Adapters
    let users = Arc::new(UserQueryMongo::new(&db));
    let categories = Arc::new(CategoryQueryMongo::new(&db));
    let products = Arc::new(ProductQueryMongo::new(&db));
    let reviews = Arc::new(ReviewQueryMongo::new(&db));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Helpers shared by the use cases
    let hydrator = Hydrator::new(users.clone(), categories.clone());
    let resolver = CategoryResolver::new(categories.clone());
    let aggregator = RatingAggregator::new(reviews.clone());

    let catalog = CatalogUseCases {
        list_products: Arc::new(ListProductsService::new(
            resolver.clone(),
            products.clone(),
            hydrator.clone(),
            clock.clone(),
        )),
        get_product: Arc::new(GetProductService::new(products.clone(), hydrator.clone())),
        list_categories: Arc::new(ListCategoriesService::new(
            CategoryQueryMongo::new(&db),
            ProductQueryMongo::new(&db),
        )),
        resolve_category: Arc::new(ResolveCategoryService::new(resolver.clone())),
        rating_summary: Arc::new(StoreRatingSummaryService::new(aggregator.clone())),
        get_store_page: Arc::new(GetStorePageService::new(
            users.clone(),
            products.clone(),
            reviews,
            hydrator,
            aggregator.clone(),
        )),
        list_stores: Arc::new(ListStoresService::new(
            users.clone(),
            products,
            aggregator,
        )),
        submit_review: Arc::new(SubmitStoreReviewService::new(
            UserQueryMongo::new(&db),
            ReviewRepositoryMongo::new(&db),
            clock.clone(),
        )),
        create_product: Arc::new(CreateProductService::new(
            users,
            resolver,
            Arc::new(ProductRepositoryMongo::new(&db)),
            clock,
        )),
    };

    let state = AppState { catalog };
    let server_url = config.server_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(db.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(health::health);
    cfg.service(health::readiness);
    // Catalog
    cfg.service(catalog_routes::list_products_handler);
    cfg.service(catalog_routes::get_product_handler);
    cfg.service(catalog_routes::list_categories_handler);
    cfg.service(catalog_routes::resolve_category_handler);
    // Stores
    cfg.service(catalog_routes::list_stores_handler);
    cfg.service(catalog_routes::get_store_rating_handler);
    cfg.service(catalog_routes::get_store_page_handler);
    // Docs
    cfg.service(api::openapi::openapi_json);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
