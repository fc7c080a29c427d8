use serde::{Deserialize, Serialize};

pub mod category;
pub mod migration;
pub mod subcategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
