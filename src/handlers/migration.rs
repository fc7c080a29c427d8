use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::migration::{MigrationStatus, MigrationStatusResponse};
use crate::services::schema;
use crate::AppState;

pub async fn get_migration_status(
    State(state): State<AppState>,
) -> Result<Json<MigrationStatusResponse>, AppError> {
    let migrations = schema::migration_status(&state.db).await?;
    let pending_count = migrations
        .iter()
        .filter(|m| m.status == MigrationStatus::Pending)
        .count();

    Ok(Json(MigrationStatusResponse {
        migrations,
        pending_count,
    }))
}
