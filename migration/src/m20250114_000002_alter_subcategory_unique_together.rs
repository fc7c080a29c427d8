//! Subcategory slugs become unique per category, with a lookup index on the pair.

use sea_orm_migration::prelude::*;

use crate::m20250114_000001_create_subcategories::UNIQUE_CATEGORY_NAME;
use crate::schema_ops::{IndexSpec, Operation};

pub const UNIQUE_CATEGORY_SLUG: &str = "subcategories_category_id_slug_uniq";

/// Name already deployed in existing databases; keep it byte-exact.
pub const CATEGORY_SLUG_INDEX: &str = "subcategori_categor_544ada_idx";

pub const DEPENDS_ON: &[&str] = &["m20250114_000001_create_subcategories"];

pub const OPERATIONS: [Operation; 2] = [
    Operation::AlterUniqueTogether {
        from: IndexSpec {
            name: UNIQUE_CATEGORY_NAME,
            table: "subcategories",
            columns: &["category_id", "name"],
            unique: true,
        },
        to: IndexSpec {
            name: UNIQUE_CATEGORY_SLUG,
            table: "subcategories",
            columns: &["category_id", "slug"],
            unique: true,
        },
    },
    Operation::AddIndex(IndexSpec {
        name: CATEGORY_SLUG_INDEX,
        table: "subcategories",
        columns: &["category_id", "slug"],
        unique: false,
    }),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Nothing is touched unless every operation can go through
        for operation in OPERATIONS.iter() {
            operation.check(manager).await?;
        }

        for operation in OPERATIONS.iter() {
            operation.apply(manager).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Undo in reverse order
        for operation in OPERATIONS.iter().rev() {
            operation.revert(manager).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_are_declared_in_order() {
        let labels: Vec<&str> = OPERATIONS.iter().map(Operation::label).collect();
        assert_eq!(labels, vec!["alter_unique_together", "add_index"]);
    }

    #[test]
    fn test_unique_key_moves_from_name_to_slug() {
        match OPERATIONS[0] {
            Operation::AlterUniqueTogether { from, to } => {
                assert_eq!(from.columns, &["category_id", "name"]);
                assert_eq!(to.columns, &["category_id", "slug"]);
                assert!(from.unique && to.unique);
            }
            other => panic!("expected unique key change first, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_index_is_not_unique() {
        match OPERATIONS[1] {
            Operation::AddIndex(index) => {
                assert_eq!(index.name, CATEGORY_SLUG_INDEX);
                assert_eq!(index.columns, &["category_id", "slug"]);
                assert!(!index.unique);
            }
            other => panic!("expected index creation second, got {:?}", other),
        }
    }

    #[test]
    fn test_depends_on_initial_schema() {
        assert_eq!(DEPENDS_ON, &["m20250114_000001_create_subcategories"]);
    }
}
