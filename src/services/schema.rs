//! Migration runner and status reporting
//!
//! Wraps the `migration` crate's `Migrator`. Anything that goes wrong while
//! applying steps is reported as `AppError::SchemaApplication`; the caller
//! decides whether that is fatal (it is at startup).

use std::collections::HashSet;

use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

use crate::error::AppError;
use crate::models::migration::{MigrationState, MigrationStatus};

fn schema_error(err: DbErr) -> AppError {
    AppError::SchemaApplication(err.to_string())
}

/// Apply every pending migration, returning the names that were applied.
///
/// Already-applied steps are skipped by the engine's ledger, so calling this
/// on an up-to-date database is a no-op that returns an empty list.
pub async fn apply_pending(db: &DatabaseConnection) -> Result<Vec<String>, AppError> {
    migration::check_dependency_order().map_err(schema_error)?;

    let pending: Vec<String> = Migrator::get_pending_migrations(db)
        .await
        .map_err(schema_error)?
        .iter()
        .map(|m| m.name().to_owned())
        .collect();

    if pending.is_empty() {
        tracing::info!("Schema is up to date");
        return Ok(pending);
    }

    tracing::info!("Applying {} pending migration(s): {:?}", pending.len(), pending);

    Migrator::up(db, None).await.map_err(|e| {
        tracing::error!("Migration failed: {}", e);
        schema_error(e)
    })?;

    tracing::info!("✅ Schema migrated");
    Ok(pending)
}

/// Every known migration with its status, in apply order.
pub async fn migration_status(db: &DatabaseConnection) -> Result<Vec<MigrationState>, AppError> {
    let applied: HashSet<String> = Migrator::get_applied_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_owned())
        .collect();

    let states = Migrator::migrations()
        .iter()
        .map(|m| {
            let name = m.name().to_owned();
            let status = if applied.contains(&name) {
                MigrationStatus::Applied
            } else {
                MigrationStatus::Pending
            };
            MigrationState { name, status }
        })
        .collect();

    Ok(states)
}
