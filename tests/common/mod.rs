#![allow(dead_code)]

use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

use subcategories_backend::{build_router, AppState};

/// Set up test database connection
/// Uses TEST_DATABASE_URL environment variable or falls back to a fresh in-memory SQLite database
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    // An in-memory SQLite database lives only as long as its connection
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Fresh database with every migration applied
pub async fn setup_migrated_db() -> DatabaseConnection {
    let db = setup_test_db().await.expect("Failed to connect to test DB");
    subcategories_backend::services::schema::apply_pending(&db)
        .await
        .expect("Failed to apply migrations");
    db
}

pub async fn build_test_router() -> Router {
    let db = setup_migrated_db().await;
    build_router(AppState { db })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database connection should succeed");
    }
}
