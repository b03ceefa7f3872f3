//! Schema-change expressions.
//!
//! One module per operation family, one struct per operation, and a closed
//! [`MigrationExpr`] enum tying them together. Every variant implements the
//! [`Expression`] capability surface; the validator drives expressions
//! through it and never looks past it.

pub mod column;
pub mod foreign_key;
pub mod index;
pub mod schema;
pub mod sql;
pub mod table;
pub mod types;

pub use self::column::{AddColumn, AlterColumn, ColumnDef, DefaultValue, DropColumn, RenameColumn};
pub use self::foreign_key::{CreateForeignKey, DropForeignKey, ReferentialAction};
pub use self::index::{CreateIndex, DropIndex, RenameIndex};
pub use self::schema::{CreateSchema, DropSchema};
pub use self::sql::ExecuteSql;
pub use self::table::{CreateTable, DropTable, RenameTable};
pub use self::types::ColumnType;

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;

/// Capability surface every schema-change operation implements.
///
/// Variant identity only ever surfaces through [`variant_name`], the opaque
/// label used to key validation errors.
///
/// [`variant_name`]: Expression::variant_name
pub trait Expression {
    /// Stable label used to key validation errors.
    fn variant_name(&self) -> &'static str;

    /// Fill unset optional fields from `conventions`.
    ///
    /// Explicit values pass through untouched, so applying twice yields the
    /// same result as applying once.
    fn apply_conventions(&mut self, conventions: &ConventionSet);

    /// Append structural defects to `errors`, one message each.
    ///
    /// Reporting by appending, instead of returning at the first defect,
    /// lets the caller aggregate across a whole sequence. No appended
    /// messages means the expression is valid.
    fn collect_validation_errors(&self, errors: &mut Vec<String>);
}

/// One atomic schema-change operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MigrationExpr {
    CreateSchema(CreateSchema),
    DropSchema(DropSchema),
    CreateTable(CreateTable),
    DropTable(DropTable),
    RenameTable(RenameTable),
    AddColumn(AddColumn),
    AlterColumn(AlterColumn),
    DropColumn(DropColumn),
    RenameColumn(RenameColumn),
    CreateIndex(CreateIndex),
    DropIndex(DropIndex),
    RenameIndex(RenameIndex),
    CreateForeignKey(CreateForeignKey),
    DropForeignKey(DropForeignKey),
    ExecuteSql(ExecuteSql),
}

impl MigrationExpr {
    fn inner(&self) -> &dyn Expression {
        match self {
            Self::CreateSchema(expr) => expr,
            Self::DropSchema(expr) => expr,
            Self::CreateTable(expr) => expr,
            Self::DropTable(expr) => expr,
            Self::RenameTable(expr) => expr,
            Self::AddColumn(expr) => expr,
            Self::AlterColumn(expr) => expr,
            Self::DropColumn(expr) => expr,
            Self::RenameColumn(expr) => expr,
            Self::CreateIndex(expr) => expr,
            Self::DropIndex(expr) => expr,
            Self::RenameIndex(expr) => expr,
            Self::CreateForeignKey(expr) => expr,
            Self::DropForeignKey(expr) => expr,
            Self::ExecuteSql(expr) => expr,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Expression {
        match self {
            Self::CreateSchema(expr) => expr,
            Self::DropSchema(expr) => expr,
            Self::CreateTable(expr) => expr,
            Self::DropTable(expr) => expr,
            Self::RenameTable(expr) => expr,
            Self::AddColumn(expr) => expr,
            Self::AlterColumn(expr) => expr,
            Self::DropColumn(expr) => expr,
            Self::RenameColumn(expr) => expr,
            Self::CreateIndex(expr) => expr,
            Self::DropIndex(expr) => expr,
            Self::RenameIndex(expr) => expr,
            Self::CreateForeignKey(expr) => expr,
            Self::DropForeignKey(expr) => expr,
            Self::ExecuteSql(expr) => expr,
        }
    }
}

impl Expression for MigrationExpr {
    fn variant_name(&self) -> &'static str {
        self.inner().variant_name()
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.inner_mut().apply_conventions(conventions);
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        self.inner().collect_validation_errors(errors);
    }
}

impl From<CreateSchema> for MigrationExpr {
    fn from(expr: CreateSchema) -> Self {
        Self::CreateSchema(expr)
    }
}

impl From<DropSchema> for MigrationExpr {
    fn from(expr: DropSchema) -> Self {
        Self::DropSchema(expr)
    }
}

impl From<CreateTable> for MigrationExpr {
    fn from(expr: CreateTable) -> Self {
        Self::CreateTable(expr)
    }
}

impl From<DropTable> for MigrationExpr {
    fn from(expr: DropTable) -> Self {
        Self::DropTable(expr)
    }
}

impl From<RenameTable> for MigrationExpr {
    fn from(expr: RenameTable) -> Self {
        Self::RenameTable(expr)
    }
}

impl From<AddColumn> for MigrationExpr {
    fn from(expr: AddColumn) -> Self {
        Self::AddColumn(expr)
    }
}

impl From<AlterColumn> for MigrationExpr {
    fn from(expr: AlterColumn) -> Self {
        Self::AlterColumn(expr)
    }
}

impl From<DropColumn> for MigrationExpr {
    fn from(expr: DropColumn) -> Self {
        Self::DropColumn(expr)
    }
}

impl From<RenameColumn> for MigrationExpr {
    fn from(expr: RenameColumn) -> Self {
        Self::RenameColumn(expr)
    }
}

impl From<CreateIndex> for MigrationExpr {
    fn from(expr: CreateIndex) -> Self {
        Self::CreateIndex(expr)
    }
}

impl From<DropIndex> for MigrationExpr {
    fn from(expr: DropIndex) -> Self {
        Self::DropIndex(expr)
    }
}

impl From<RenameIndex> for MigrationExpr {
    fn from(expr: RenameIndex) -> Self {
        Self::RenameIndex(expr)
    }
}

impl From<CreateForeignKey> for MigrationExpr {
    fn from(expr: CreateForeignKey) -> Self {
        Self::CreateForeignKey(expr)
    }
}

impl From<DropForeignKey> for MigrationExpr {
    fn from(expr: DropForeignKey) -> Self {
        Self::DropForeignKey(expr)
    }
}

impl From<ExecuteSql> for MigrationExpr {
    fn from(expr: ExecuteSql) -> Self {
        Self::ExecuteSql(expr)
    }
}
