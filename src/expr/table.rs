//! Table-level change expressions.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::{ColumnDef, Expression};

/// Creates a table with its column definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    /// Name for the table's primary key constraint; filled by convention
    /// when any column is marked primary key.
    #[serde(default)]
    pub primary_key_name: Option<String>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns: Vec::new(),
            primary_key_name: None,
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_primary_key_name(mut self, name: impl Into<String>) -> Self {
        self.primary_key_name = Some(name.into());
        self
    }
}

impl Expression for CreateTable {
    fn variant_name(&self) -> &'static str {
        "CreateTable"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
        if self.columns.iter().any(|column| column.primary_key) {
            self.primary_key_name =
                Some(conventions.primary_key_name(self.primary_key_name.take(), &self.name));
        }
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.name.is_empty() {
            errors.push("table name is required".into());
        }
        if self.columns.is_empty() {
            errors.push("table must have at least one column".into());
        }
        for column in &self.columns {
            column.collect_validation_errors(errors);
        }
    }
}

/// Drops a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTable {
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
}

impl DropTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for DropTable {
    fn variant_name(&self) -> &'static str {
        "DropTable"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.name.is_empty() {
            errors.push("table name is required".into());
        }
    }
}

/// Renames a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameTable {
    #[serde(default)]
    pub schema: Option<String>,
    pub old_name: String,
    pub new_name: String,
}

impl RenameTable {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            schema: None,
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for RenameTable {
    fn variant_name(&self) -> &'static str {
        "RenameTable"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.old_name.is_empty() {
            errors.push("current table name is required".into());
        }
        if self.new_name.is_empty() {
            errors.push("new table name is required".into());
        }
    }
}
