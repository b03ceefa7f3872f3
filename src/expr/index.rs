//! Index change expressions.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::Expression;

/// Creates an index over one or more columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndex {
    #[serde(default)]
    pub schema: Option<String>,
    /// Filled by convention from the table and columns when unset.
    #[serde(default)]
    pub name: Option<String>,
    pub table: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

impl CreateIndex {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: None,
            table: table.into(),
            columns: Vec::new(),
            unique: false,
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for CreateIndex {
    fn variant_name(&self) -> &'static str {
        "CreateIndex"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
        self.name = Some(conventions.index_name(self.name.take(), &self.table, &self.columns));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.columns.is_empty() {
            errors.push("index must reference at least one column".into());
        } else if self.columns.iter().any(String::is_empty) {
            errors.push("index column names cannot be empty".into());
        }
    }
}

/// Drops an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropIndex {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub name: String,
}

impl DropIndex {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
            name: name.into(),
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Expression for DropIndex {
    fn variant_name(&self) -> &'static str {
        "DropIndex"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.name.is_empty() {
            errors.push("index name is required".into());
        }
    }
}

/// Renames an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameIndex {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub old_name: String,
    pub new_name: String,
}

impl RenameIndex {
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

impl Expression for RenameIndex {
    fn variant_name(&self) -> &'static str {
        "RenameIndex"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.old_name.is_empty() {
            errors.push("current index name is required".into());
        }
        if self.new_name.is_empty() {
            errors.push("new index name is required".into());
        }
    }
}
