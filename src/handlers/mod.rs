pub mod category;
pub mod health;
pub mod migration;
pub mod subcategory;
