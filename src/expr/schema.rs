//! Schema (namespace) change expressions.
//!
//! These name their target explicitly, so conventions have nothing to fill.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::Expression;

/// Creates a database schema (namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSchema {
    pub name: String,
}

impl CreateSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Expression for CreateSchema {
    fn variant_name(&self) -> &'static str {
        "CreateSchema"
    }

    fn apply_conventions(&mut self, _conventions: &ConventionSet) {}

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.name.is_empty() {
            errors.push("schema name is required".into());
        }
    }
}

/// Drops a database schema (namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSchema {
    pub name: String,
}

impl DropSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Expression for DropSchema {
    fn variant_name(&self) -> &'static str {
        "DropSchema"
    }

    fn apply_conventions(&mut self, _conventions: &ConventionSet) {}

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.name.is_empty() {
            errors.push("schema name is required".into());
        }
    }
}
