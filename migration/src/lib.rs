pub use sea_orm_migration::prelude::*;

pub mod schema_ops;

pub mod m20250114_000001_create_subcategories;
pub mod m20250114_000002_alter_subcategory_unique_together;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250114_000001_create_subcategories::Migration),
            Box::new(m20250114_000002_alter_subcategory_unique_together::Migration),
        ]
    }
}

/// Declared predecessors of every step, keyed by step name.
pub fn dependencies() -> Vec<(String, &'static [&'static str])> {
    vec![
        (
            m20250114_000001_create_subcategories::Migration.name().to_owned(),
            m20250114_000001_create_subcategories::DEPENDS_ON,
        ),
        (
            m20250114_000002_alter_subcategory_unique_together::Migration
                .name()
                .to_owned(),
            m20250114_000002_alter_subcategory_unique_together::DEPENDS_ON,
        ),
    ]
}

/// Check that every declared predecessor is known and runs earlier.
pub fn check_dependency_order() -> Result<(), DbErr> {
    let order: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_owned())
        .collect();

    verify_order(&order, &dependencies())
}

fn verify_order(order: &[String], declared: &[(String, &[&str])]) -> Result<(), DbErr> {
    for (name, depends_on) in declared {
        let position = order
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DbErr::Migration(format!("{} is not registered", name)))?;

        for dependency in depends_on.iter() {
            match order.iter().position(|n| n == dependency) {
                Some(p) if p < position => {}
                Some(_) => {
                    return Err(DbErr::Migration(format!(
                        "{} must run after {}",
                        name, dependency
                    )))
                }
                None => {
                    return Err(DbErr::Migration(format!(
                        "{} depends on unknown migration {}",
                        name, dependency
                    )))
                }
            }
        }
    }

    Ok(())
}
