//! Raw SQL pass-through expression.

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionSet;
use crate::expr::Expression;

/// A raw statement handed to the generator verbatim.
///
/// The escape hatch for changes the expression model cannot describe.
/// Conventions have nothing to fill here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSql {
    pub statement: String,
}

impl ExecuteSql {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }
}

impl Expression for ExecuteSql {
    fn variant_name(&self) -> &'static str {
        "ExecuteSql"
    }

    fn apply_conventions(&mut self, _conventions: &ConventionSet) {}

    fn collect_validation_errors(&self, errors: &mut Vec<String>) {
        if self.statement.trim().is_empty() {
            errors.push("sql statement is required".into());
        }
    }
}
