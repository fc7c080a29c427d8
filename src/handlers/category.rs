use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::models::category::{CategoriesListResponse, CategoryResponse, CreateCategoryRequest};
use crate::services::category_service::{self, NewCategory};
use crate::AppState;

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesListResponse>, AppError> {
    let categories = category_service::list_categories(&state.db).await?;

    let response: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();

    Ok(Json(response))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let Json(payload) = payload?;
    let category = category_service::create_category(
        &state.db,
        NewCategory {
            name: payload.name,
            slug: payload.slug,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}
