use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::subcategories;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<subcategories::Model> for SubcategoryResponse {
    fn from(model: subcategories::Model) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoriesListResponse {
    pub category: String,
    pub subcategories: Vec<SubcategoryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubcategoryRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}
