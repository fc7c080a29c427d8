use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{categories, prelude::*, subcategories};
use crate::error::AppError;
use crate::services::slug::resolve_slug;

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSubcategory {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

fn require_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

pub async fn create_category(
    db: &DatabaseConnection,
    input: NewCategory,
) -> Result<categories::Model, AppError> {
    let name = require_name(&input.name)?;
    let slug = resolve_slug(&name, input.slug.as_deref())?;

    let model = categories::ActiveModel {
        name: Set(name),
        slug: Set(slug.clone()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_write(e, &format!("category {:?}", slug)))?;

    tracing::info!("Created category {} ({})", model.slug, model.id);
    Ok(model)
}

pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<categories::Model>, AppError> {
    let rows = Categories::find()
        .order_by(categories::Column::Name, Order::Asc)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_category_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<categories::Model, AppError> {
    Categories::find()
        .filter(categories::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {:?}", slug)))
}

/// Insert a subcategory under `category_id`.
///
/// Fails with `ConstraintViolation` when the category already has a
/// subcategory with the same slug. Other categories may reuse it.
pub async fn create_subcategory(
    db: &DatabaseConnection,
    category_id: i32,
    input: NewSubcategory,
) -> Result<subcategories::Model, AppError> {
    let name = require_name(&input.name)?;
    let slug = resolve_slug(&name, input.slug.as_deref())?;
    let description = input
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let model = subcategories::ActiveModel {
        category_id: Set(category_id),
        name: Set(name),
        slug: Set(slug.clone()),
        description: Set(description),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_write(e, &format!("subcategory {:?}", slug)))?;

    tracing::info!(
        "Created subcategory {} in category {} ({})",
        model.slug,
        model.category_id,
        model.id
    );
    Ok(model)
}

pub async fn list_subcategories(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<subcategories::Model>, AppError> {
    let rows = Subcategories::find()
        .filter(subcategories::Column::CategoryId.eq(category_id))
        .order_by(subcategories::Column::Name, Order::Asc)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_subcategory(
    db: &DatabaseConnection,
    category_id: i32,
    slug: &str,
) -> Result<subcategories::Model, AppError> {
    Subcategories::find()
        .filter(subcategories::Column::CategoryId.eq(category_id))
        .filter(subcategories::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("subcategory {:?}", slug)))
}
