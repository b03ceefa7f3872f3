//! Environment conventions for defaulting unset expression fields.
//!
//! A [`ConventionSet`] is a bundle of pure resolvers: given the explicit
//! value an author supplied (or `None`), each resolver returns the value the
//! expression should carry. Explicit values always pass through untouched,
//! which is what makes convention application idempotent. Resolvers never
//! fail; at most they compute a default from the other fields present.
//!
//! The set is stateless and can be shared across concurrent validation
//! passes.

use serde::{Deserialize, Serialize};

/// Naming and defaulting policies for one target environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConventionSet {
    default_schema: String,
}

impl Default for ConventionSet {
    fn default() -> Self {
        Self {
            default_schema: "public".into(),
        }
    }
}

impl ConventionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the schema used when an expression names none.
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    pub fn default_schema(&self) -> &str {
        &self.default_schema
    }

    /// Resolve a schema name. An empty explicit value counts as unset.
    pub fn resolve_schema(&self, explicit: Option<String>) -> String {
        match explicit {
            Some(schema) if !schema.is_empty() => schema,
            _ => self.default_schema.clone(),
        }
    }

    /// Resolve an index name: `idx_{table}_{col1}_{col2}...` unless named
    /// explicitly.
    pub fn index_name(&self, explicit: Option<String>, table: &str, columns: &[String]) -> String {
        match explicit {
            Some(name) if !name.is_empty() => name,
            _ => format!("idx_{}_{}", table, columns.join("_")),
        }
    }

    /// Resolve a primary key constraint name: `pk_{table}` unless named
    /// explicitly.
    pub fn primary_key_name(&self, explicit: Option<String>, table: &str) -> String {
        match explicit {
            Some(name) if !name.is_empty() => name,
            _ => format!("pk_{table}"),
        }
    }

    /// Resolve a foreign key constraint name: `fk_{table}_{col1}...` from
    /// the referencing side, unless named explicitly.
    pub fn foreign_key_name(
        &self,
        explicit: Option<String>,
        from_table: &str,
        from_columns: &[String],
    ) -> String {
        match explicit {
            Some(name) if !name.is_empty() => name,
            _ => format!("fk_{}_{}", from_table, from_columns.join("_")),
        }
    }
}
