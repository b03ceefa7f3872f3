//! Error types for Strata.

use thiserror::Error;

use crate::migration::MigrationId;

/// The main error type for Strata operations.
#[derive(Debug, Error)]
pub enum StrataError {
    /// One or more expressions in a migration failed structural validation.
    ///
    /// `errors` is the full aggregated block, one line per offending
    /// operation kind. Fatal to that migration's execution; never retried.
    #[error("migration {migration} contained the following validation errors:\n{errors}")]
    InvalidMigration {
        migration: MigrationId,
        errors: String,
    },

    /// A column type name could not be resolved.
    #[error("unknown column type: '{0}'")]
    UnknownColumnType(String),
}

impl StrataError {
    /// Create an invalid-migration error from the rendered error block.
    pub fn invalid_migration(migration: MigrationId, errors: impl Into<String>) -> Self {
        Self::InvalidMigration {
            migration,
            errors: errors.into(),
        }
    }
}

/// Result type alias for Strata operations.
pub type StrataResult<T> = Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_migration_display() {
        let err = StrataError::invalid_migration(
            MigrationId::new(42, "add_users"),
            "CreateTable: table name is required",
        );
        assert_eq!(
            err.to_string(),
            "migration 42_add_users contained the following validation errors:\n\
             CreateTable: table name is required"
        );
    }

    #[test]
    fn test_unknown_column_type_display() {
        let err = StrataError::UnknownColumnType("uuud".into());
        assert_eq!(err.to_string(), "unknown column type: 'uuud'");
    }
}
