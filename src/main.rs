use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use subcategories_backend::{build_router, config::Config, services::schema, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,subcategories_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    if config.run_migrations {
        tracing::info!("Running migrations...");
        if let Err(e) = schema::apply_pending(&db).await {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    } else {
        tracing::warn!("RUN_MIGRATIONS is off, skipping schema migration");
    }

    let app = build_router(AppState { db });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(
        "Server listening on {}",
        listener.local_addr().expect("listener has a local address")
    );

    axum::serve(listener, app).await.expect("Server error");
}
