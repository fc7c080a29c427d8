use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::categories;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

impl From<categories::Model> for CategoryResponse {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
        }
    }
}

pub type CategoriesListResponse = Vec<CategoryResponse>;

/// Body of `POST /api/categories`. The slug is derived from the name when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
}
