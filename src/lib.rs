// src/lib.rs

use axum::{
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;
    pub mod categories;
    pub mod subcategories;
}

pub mod services {
    pub mod category_service;
    pub mod schema;
    pub mod slug;
}

pub mod config;
pub mod error;
pub mod models;
pub mod handlers;

/// All HTTP routes of the service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::hello))
        .route("/health", get(handlers::health::health))
        .route(
            "/api/migrations",
            get(handlers::migration::get_migration_status),
        )
        .route(
            "/api/categories",
            get(handlers::category::get_categories).post(handlers::category::create_category),
        )
        .route(
            "/api/categories/{category}/subcategories",
            get(handlers::subcategory::get_subcategories)
                .post(handlers::subcategory::create_subcategory),
        )
        .route(
            "/api/categories/{category}/subcategories/{slug}",
            get(handlers::subcategory::get_subcategory),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
