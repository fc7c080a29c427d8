use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::models::subcategory::{
    CreateSubcategoryRequest, SubcategoriesListResponse, SubcategoryResponse,
};
use crate::services::category_service::{self, NewSubcategory};
use crate::AppState;

/// GET /api/categories/{category}/subcategories
pub async fn get_subcategories(
    State(state): State<AppState>,
    Path(category_slug): Path<String>,
) -> Result<Json<SubcategoriesListResponse>, AppError> {
    let category = category_service::find_category_by_slug(&state.db, &category_slug).await?;
    let rows = category_service::list_subcategories(&state.db, category.id).await?;

    Ok(Json(SubcategoriesListResponse {
        category: category.slug,
        subcategories: rows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/categories/{category}/subcategories/{slug}
pub async fn get_subcategory(
    State(state): State<AppState>,
    Path((category_slug, slug)): Path<(String, String)>,
) -> Result<Json<SubcategoryResponse>, AppError> {
    let category = category_service::find_category_by_slug(&state.db, &category_slug).await?;
    let subcategory = category_service::find_subcategory(&state.db, category.id, &slug).await?;

    Ok(Json(subcategory.into()))
}

/// POST /api/categories/{category}/subcategories
///
/// Returns 409 when the category already has a subcategory with this slug.
pub async fn create_subcategory(
    State(state): State<AppState>,
    Path(category_slug): Path<String>,
    payload: Result<Json<CreateSubcategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubcategoryResponse>), AppError> {
    let Json(payload) = payload?;
    let category = category_service::find_category_by_slug(&state.db, &category_slug).await?;
    let subcategory = category_service::create_subcategory(
        &state.db,
        category.id,
        NewSubcategory {
            name: payload.name,
            slug: payload.slug,
            description: payload.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(subcategory.into())))
}
