//! Convention application and validation orchestration.
//!
//! The runner hands a migration here before anything reaches a SQL
//! generator. Expressions are processed strictly in the order supplied and
//! the pass never short-circuits: a failing migration reports every
//! defective operation in one block, so operators fix everything in one
//! round trip instead of one error at a time.

use tracing::{debug, warn};

use crate::collector::ValidationErrors;
use crate::conventions::ConventionSet;
use crate::error::{StrataError, StrataResult};
use crate::expr::{Expression, MigrationExpr};
use crate::migration::{Direction, Migration, MigrationId};
use crate::report::{NullReporter, Reporter};

/// Applies conventions to and validates a migration's expressions.
pub struct MigrationValidator {
    conventions: ConventionSet,
    reporter: Box<dyn Reporter>,
}

impl MigrationValidator {
    /// A validator with the given conventions and no reporting sink.
    pub fn new(conventions: ConventionSet) -> Self {
        Self {
            conventions,
            reporter: Box::new(NullReporter),
        }
    }

    /// Attach a reporting sink for operator-facing announcements.
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Validate one direction of `migration`.
    ///
    /// On success the expressions are conventions-applied in place and
    /// ready for generation. On failure the returned error lists every
    /// defective expression; nothing from this migration may reach a
    /// generator.
    pub fn validate(&self, migration: &mut Migration, direction: Direction) -> StrataResult<()> {
        let id = migration.id.clone();
        self.validate_expressions(&id, migration.expressions_mut(direction))
    }

    /// Validate an explicit expression sequence on behalf of `migration`.
    ///
    /// Each expression, in supplied order, has conventions applied and its
    /// structural errors collected under its variant name. Validation
    /// failures are terminal: they are announced to the reporting sink and
    /// returned, never retried.
    pub fn validate_expressions(
        &self,
        migration: &MigrationId,
        expressions: &mut [MigrationExpr],
    ) -> StrataResult<()> {
        let mut collected = ValidationErrors::new();

        for expression in expressions.iter_mut() {
            expression.apply_conventions(&self.conventions);

            let mut errors = Vec::new();
            expression.collect_validation_errors(&mut errors);
            if !errors.is_empty() {
                collected.add(expression.variant_name(), errors.join(" "));
            }
        }

        if collected.is_empty() {
            debug!(
                migration = %migration,
                expressions = expressions.len(),
                "migration validated"
            );
            return Ok(());
        }

        let errors = collected.render_with(|key, value| format!("{key}: {value}"));
        warn!(migration = %migration, "migration failed validation");
        // The announcement and the returned error carry identical text.
        self.reporter.error(&format!(
            "migration {migration} contained the following validation errors:\n{errors}"
        ));
        Err(StrataError::invalid_migration(migration.clone(), errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{ColumnDef, ColumnType, CreateTable, ExecuteSql};

    #[test]
    fn test_valid_sequence_passes() {
        let validator = MigrationValidator::new(ConventionSet::default());
        let id = MigrationId::new(1, "init");
        let mut exprs: Vec<MigrationExpr> = vec![
            CreateTable::new("users")
                .column(ColumnDef::new("id", ColumnType::BigInt).primary_key())
                .into(),
        ];

        validator.validate_expressions(&id, &mut exprs).unwrap();
    }

    #[test]
    fn test_every_expression_is_checked() {
        let validator = MigrationValidator::new(ConventionSet::default());
        let id = MigrationId::new(2, "broken");
        let mut exprs: Vec<MigrationExpr> = vec![
            CreateTable::new("t").into(),
            ExecuteSql::new("").into(),
        ];

        let err = validator.validate_expressions(&id, &mut exprs).unwrap_err();
        let StrataError::InvalidMigration { migration, errors } = err else {
            panic!("expected InvalidMigration");
        };
        assert_eq!(migration, id);
        assert_eq!(
            errors,
            "CreateTable: table must have at least one column\n\
             ExecuteSql: sql statement is required"
        );
    }
}
