use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// A write duplicated a unique key.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A migration could not be applied.
    #[error("schema application failed: {0}")]
    SchemaApplication(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    /// Classify an error returned by an insert or update.
    pub fn from_write(err: DbErr, what: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Rejected duplicate {}: {}", what, detail);
                AppError::ConstraintViolation(format!("{} already exists", what))
            }
            _ => AppError::Database(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SchemaApplication(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ConstraintViolation("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::SchemaApplication("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_non_constraint_write_error_stays_database_error() {
        let err = AppError::from_write(DbErr::Custom("boom".into()), "subcategory");
        assert!(matches!(err, AppError::Database(_)));
    }
}
