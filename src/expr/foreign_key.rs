//! Foreign key change expressions.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::Expression;

/// What the database does to referencing rows when the referenced row
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

/// Creates a foreign key from `from_table` columns to `to_table` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateForeignKey {
    /// Filled by convention from the referencing side when unset.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub from_schema: Option<String>,
    pub from_table: String,
    pub from_columns: Vec<String>,
    #[serde(default)]
    pub to_schema: Option<String>,
    pub to_table: String,
    pub to_columns: Vec<String>,
    #[serde(default)]
    pub on_delete: ReferentialAction,
    #[serde(default)]
    pub on_update: ReferentialAction,
}

impl CreateForeignKey {
    pub fn new(from_table: impl Into<String>, to_table: impl Into<String>) -> Self {
        Self {
            name: None,
            from_schema: None,
            from_table: from_table.into(),
            from_columns: Vec::new(),
            to_schema: None,
            to_table: to_table.into(),
            to_columns: Vec::new(),
            on_delete: ReferentialAction::NoAction,
            on_update: ReferentialAction::NoAction,
        }
    }

    /// Add one referencing/referenced column pair.
    pub fn column_pair(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_columns.push(from.into());
        self.to_columns.push(to.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }
}

impl Expression for CreateForeignKey {
    fn variant_name(&self) -> &'static str {
        "CreateForeignKey"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.from_schema = Some(conventions.resolve_schema(self.from_schema.take()));
        self.to_schema = Some(conventions.resolve_schema(self.to_schema.take()));
        self.name = Some(conventions.foreign_key_name(
            self.name.take(),
            &self.from_table,
            &self.from_columns,
        ));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.from_table.is_empty() {
            errors.push("source table name is required".into());
        }
        if self.to_table.is_empty() {
            errors.push("target table name is required".into());
        }
        if self.from_columns.is_empty() {
            errors.push("foreign key must reference at least one source column".into());
        }
        if self.to_columns.is_empty() {
            errors.push("foreign key must reference at least one target column".into());
        }
        if !self.from_columns.is_empty()
            && !self.to_columns.is_empty()
            && self.from_columns.len() != self.to_columns.len()
        {
            errors.push("foreign key source and target column counts must match".into());
        }
        if !self.from_columns.is_empty()
            && self.from_table == self.to_table
            && self.from_columns == self.to_columns
        {
            errors.push("foreign key cannot reference its own columns".into());
        }
    }
}

/// Drops a foreign key by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropForeignKey {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    pub name: String,
}

impl DropForeignKey {
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

impl Expression for DropForeignKey {
    fn variant_name(&self) -> &'static str {
        "DropForeignKey"
    }

    fn apply_conventions(&mut self, conventions: &ConventionSet) {
        self.schema = Some(conventions.resolve_schema(self.schema.take()));
    }

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.table.is_empty() {
            errors.push("table name is required".into());
        }
        if self.name.is_empty() {
            errors.push("foreign key name is required".into());
        }
    }
}
