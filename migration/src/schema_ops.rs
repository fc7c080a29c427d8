//! Declarative schema operations
//!
//! A migration step that only reshapes indexes lists its changes as an
//! ordered `[Operation]`, runs `check` on all of them, then lets
//! `apply`/`revert` walk it. Tables and columns are referenced by name.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend, Statement, Value};

/// A named index over an ordered column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub unique: bool,
}

impl IndexSpec {
    pub fn create_statement(&self) -> IndexCreateStatement {
        let mut index = Index::create();
        index.name(self.name).table(Alias::new(self.table));
        for column in self.columns {
            index.col(Alias::new(*column));
        }
        if self.unique {
            index.unique();
        }
        index
    }

    pub fn drop_statement(&self) -> IndexDropStatement {
        Index::drop()
            .name(self.name)
            .table(Alias::new(self.table))
            .to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Swap the table's uniqueness key for a new one.
    AlterUniqueTogether { from: IndexSpec, to: IndexSpec },
    /// Add a secondary index. Fails if the name is already taken.
    AddIndex(IndexSpec),
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::AlterUniqueTogether { .. } => "alter_unique_together",
            Operation::AddIndex(_) => "add_index",
        }
    }

    /// Fail if `apply` could not succeed on the current catalog and data.
    ///
    /// Run for every operation of a step before the first one is applied, so
    /// a conflict leaves the catalog as it was even without transactional DDL.
    pub async fn check(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        match self {
            Operation::AlterUniqueTogether { to, .. } => {
                ensure_index_absent(manager, self.label(), to).await?;
                ensure_no_duplicates(manager, self.label(), to).await
            }
            Operation::AddIndex(index) => ensure_index_absent(manager, self.label(), index).await,
        }
    }

    pub async fn apply(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        match self {
            Operation::AlterUniqueTogether { from, to } => {
                manager.drop_index(from.drop_statement()).await?;
                manager.create_index(to.create_statement()).await
            }
            Operation::AddIndex(index) => manager.create_index(index.create_statement()).await,
        }
    }

    pub async fn revert(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        match self {
            Operation::AlterUniqueTogether { from, to } => {
                ensure_no_duplicates(manager, self.label(), from).await?;
                manager.drop_index(to.drop_statement()).await?;
                manager.create_index(from.create_statement()).await
            }
            Operation::AddIndex(index) => manager.drop_index(index.drop_statement()).await,
        }
    }
}

/// Fail if an index named like `index` already exists.
async fn ensure_index_absent(
    manager: &SchemaManager<'_>,
    label: &str,
    index: &IndexSpec,
) -> Result<(), DbErr> {
    let db = manager.get_connection();
    let backend = db.get_database_backend();
    let (sql, values): (&str, Vec<Value>) = match backend {
        DbBackend::Sqlite => (
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name = ?",
            vec![index.name.into()],
        ),
        DbBackend::Postgres => (
            "SELECT indexname FROM pg_indexes WHERE schemaname = current_schema() \
             AND indexname = $1",
            vec![index.name.into()],
        ),
        _ => (
            "SELECT index_name FROM information_schema.statistics \
             WHERE table_schema = DATABASE() AND table_name = ? AND index_name = ?",
            vec![index.table.into(), index.name.into()],
        ),
    };

    let existing = db
        .query_one(Statement::from_sql_and_values(backend, sql, values))
        .await?;
    if existing.is_some() {
        return Err(DbErr::Migration(format!(
            "{}: index {} already exists",
            label, index.name
        )));
    }

    Ok(())
}

/// Fail if stored rows already repeat a value tuple of `key`.
async fn ensure_no_duplicates(
    manager: &SchemaManager<'_>,
    label: &str,
    key: &IndexSpec,
) -> Result<(), DbErr> {
    let columns: Vec<Alias> = key.columns.iter().map(|c| Alias::new(*c)).collect();

    let query = Query::select()
        .expr_as(Expr::col(Asterisk).count(), Alias::new("duplicates"))
        .from(Alias::new(key.table))
        .group_by_columns(columns)
        .and_having(Expr::expr(Expr::col(Asterisk).count()).gt(1))
        .limit(1)
        .to_owned();

    let db = manager.get_connection();
    let stmt = db.get_database_backend().build(&query);

    if let Some(row) = db.query_one(stmt).await? {
        let duplicates: i64 = row.try_get("", "duplicates")?;
        return Err(DbErr::Migration(format!(
            "{}: cannot apply unique key {} on {}({}): {} existing rows share the same values",
            label,
            key.name,
            key.table,
            key.columns.join(", "),
            duplicates
        )));
    }

    Ok(())
}
