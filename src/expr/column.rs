//! Column definitions and column-level change expressions.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::{ColumnType, Expression};

/// Default value for a column, resolved to dialect SQL by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// Verbatim literal or SQL expression.
    Literal(String),
    /// Database-side current timestamp.
    CurrentTimestamp,
    /// Database-side random UUID.
    NewUuid,
    Null,
}

/// A column definition carried by table and column expressions.
///
/// The type is optional at the model level so the authoring layer can build
/// definitions incrementally; validation rejects a definition that never
/// received one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: Option<ColumnType>,
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub identity: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type: Some(column_type),
            nullable: true,
            primary_key: false,
            unique: false,
            identity: false,
            default: None,
        }
    }

    /// A definition with no type yet; the authoring layer fills it later.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: None,
            nullable: true,
            primary_key: false,
            unique: false,
            identity: false,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Primary key columns are implicitly not null.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Structural checks shared by every expression that carries a column
    /// definition.
    pub fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.name.is_empty() {
            errors.push("column name is required".into());
        }
        match &self.column_type {
            None => errors.push("column type is required".into()),
            Some(column_type) => {
                if self.identity && !column_type.can_auto_increment() {
                    errors.push(format!(
                        "identity column '{}' must use an integer type",
                        self.name
                    ));
                }
            }
        }
        if self.identity && self.default.is_some() {
            errors.push(format!(
                "identity column '{}' cannot have a default value",
                self.name
            ));
        }
    }
}

/// Adds one column to an existing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddColumn {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub column: ColumnDef,
}

impl AddColumn {
    pub fn new(table: impl Into<String>, column: ColumnDef) -> Self {
        Self {
            schema: None,
            table: table.into(),
            column,
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for AddColumn {
    fn variant_name(&self) -> &'static str {
        "AddColumn"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        self.column.collect_validation_errors(errors);
    }
}

/// Redefines an existing column in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterColumn {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub column: ColumnDef,
}

impl AlterColumn {
    pub fn new(table: impl Into<String>, column: ColumnDef) -> Self {
        Self {
            schema: None,
            table: table.into(),
            column,
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for AlterColumn {
    fn variant_name(&self) -> &'static str {
        "AlterColumn"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        self.column.collect_validation_errors(errors);
    }
}

/// Drops one or more columns from a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropColumn {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub columns: Vec<String>,
}

impl DropColumn {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for DropColumn {
    fn variant_name(&self) -> &'static str {
        "DropColumn"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.columns.is_empty() {
            errors.push("at least one column name is required".into());
        } else if self.columns.iter().any(String::is_empty) {
            errors.push("column names cannot be empty".into());
        }
    }
}

/// Renames a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameColumn {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub old_name: String,
    pub new_name: String,
}

impl RenameColumn {
    pub fn new(
        table: impl Into<String>,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        Self {
            schema: None,
            table: table.into(),
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for RenameColumn {
    fn variant_name(&self) -> &'static str {
        "RenameColumn"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.old_name.is_empty() {
            errors.push("current column name is required".into());
        }
        if self.new_name.is_empty() {
            errors.push("new column name is required".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_of(expr: &impl Expression) -> Vec<String> {
        let mut errors = Vec::new();
        expr.collect_validation_errors(&mut errors);
        errors
    }

    #[test]
    fn test_primary_key_implies_not_null() {
        let column = ColumnDef::new("id", ColumnType::BigInt).primary_key();
        assert!(column.primary_key);
        assert!(!column.nullable);
    }

    #[test]
    fn test_untyped_column_is_rejected() {
        let expr = AddColumn::new("users", ColumnDef::named("age"));
        assert_eq!(errors_of(&expr), vec!["column type is required"]);
    }

    #[test]
    fn test_identity_requires_integer_type() {
        let expr = AddColumn::new("users", ColumnDef::new("id", ColumnType::Uuid).identity());
        assert_eq!(
            errors_of(&expr),
            vec!["identity column 'id' must use an integer type"]
        );
    }

    #[test]
    fn test_identity_rejects_default() {
        let column = ColumnDef::new("id", ColumnType::BigInt)
            .identity()
            .default_value(DefaultValue::Literal("0".into()));
        let expr = AddColumn::new("users", column);
        assert_eq!(
            errors_of(&expr),
            vec!["identity column 'id' cannot have a default value"]
        );
    }

    #[test]
    fn test_drop_column_needs_at_least_one_name() {
        let expr = DropColumn::new("users");
        assert_eq!(errors_of(&expr), vec!["at least one column name is required"]);
    }

    #[test]
    fn test_rename_column_needs_both_names() {
        let expr = RenameColumn::new("users", "", "");
        assert_eq!(
            errors_of(&expr),
            vec![
                "current column name is required",
                "new column name is required"
            ]
        );
    }

    #[test]
    fn test_explicit_schema_survives_conventions() {
        let conventions = ConventionSet::default();
        let mut expr = AddColumn::new("users", ColumnDef::new("age", ColumnType::Int))
            .in_schema("audit");
        expr.apply_conventions(&conventions);
        assert_eq!(expr.schema.as_deref(), Some("audit"));
    }
}
