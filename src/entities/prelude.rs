//! `SeaORM` Entity prelude

pub use super::categories::Entity as Categories;
pub use super::subcategories::Entity as Subcategories;
