use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use strata::prelude::*;

/// Captures announcements so tests can compare them with the returned
/// error.
#[derive(Clone, Default)]
struct RecordingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Reporter for RecordingReporter {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_valid_migration_passes_and_is_conventions_applied() {
    let mut migration = Migration::new(20240101120000, "create_users")
        .up(CreateTable::new("users")
            .column(ColumnDef::new("id", ColumnType::BigInt).primary_key())
            .column(ColumnDef::new("email", ColumnType::Text).not_null().unique()))
        .up(CreateIndex::new("users").column("email").unique());

    let validator = MigrationValidator::new(ConventionSet::default());
    validator.validate(&mut migration, Direction::Up).unwrap();

    let MigrationExpr::CreateTable(table) = &migration.up[0] else {
        panic!("expected CreateTable");
    };
    assert_eq!(table.schema.as_deref(), Some("public"));
    assert_eq!(table.primary_key_name.as_deref(), Some("pk_users"));

    let MigrationExpr::CreateIndex(index) = &migration.up[1] else {
        panic!("expected CreateIndex");
    };
    assert_eq!(index.name.as_deref(), Some("idx_users_email"));
}

#[test]
fn test_failure_aggregates_every_expression() {
    // The two defects live in different expressions; both must survive into
    // the one failure.
    let mut migration = Migration::new(3, "broken")
        .up(CreateTable::new("t"))
        .up(AddColumn::new("t", ColumnDef::named("c")));

    let validator = MigrationValidator::new(ConventionSet::default());
    let err = validator.validate(&mut migration, Direction::Up).unwrap_err();

    let StrataError::InvalidMigration { migration: id, errors } = &err else {
        panic!("expected InvalidMigration, got {err:?}");
    };
    assert_eq!(id.to_string(), "3_broken");
    assert_eq!(
        errors,
        "CreateTable: table must have at least one column\n\
         AddColumn: column type is required"
    );
}

#[test]
fn test_errors_keep_sequence_order() {
    let mut migration = Migration::new(4, "ordering")
        .up(ExecuteSql::new(""))
        .up(CreateIndex::new("users"));

    let validator = MigrationValidator::new(ConventionSet::default());
    let err = validator.validate(&mut migration, Direction::Up).unwrap_err();

    let StrataError::InvalidMigration { errors, .. } = &err else {
        panic!("expected InvalidMigration");
    };
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ExecuteSql: sql statement is required",
            "CreateIndex: index must reference at least one column",
        ]
    );
}

#[test]
fn test_same_variant_errors_share_one_key() {
    let mut migration = Migration::new(5, "two_adds")
        .up(AddColumn::new("t", ColumnDef::named("a")))
        .up(AddColumn::new("", ColumnDef::new("b", ColumnType::Int)));

    let validator = MigrationValidator::new(ConventionSet::default());
    let err = validator.validate(&mut migration, Direction::Up).unwrap_err();

    let StrataError::InvalidMigration { errors, .. } = &err else {
        panic!("expected InvalidMigration");
    };
    assert_eq!(
        errors,
        "AddColumn: column type is required table name is required"
    );
}

#[test]
fn test_convention_application_is_idempotent() {
    let mut migration = Migration::new(6, "idempotent")
        .up(CreateTable::new("users")
            .column(ColumnDef::new("id", ColumnType::BigInt).primary_key()))
        .up(CreateForeignKey::new("orders", "users").column_pair("user_id", "id"));

    let validator = MigrationValidator::new(ConventionSet::default());
    validator.validate(&mut migration, Direction::Up).unwrap();
    let first_pass = migration.clone();

    validator.validate(&mut migration, Direction::Up).unwrap();
    assert_eq!(migration, first_pass);
}

#[test]
fn test_directions_validate_independently() {
    let mut migration = Migration::new(7, "one_way")
        .up(CreateTable::new("users").column(ColumnDef::new("id", ColumnType::BigInt)))
        .down(DropTable::new(""));

    let validator = MigrationValidator::new(ConventionSet::default());
    validator.validate(&mut migration, Direction::Up).unwrap();
    let err = validator
        .validate(&mut migration, Direction::Down)
        .unwrap_err();
    assert!(err.to_string().contains("DropTable: table name is required"));
}

#[test]
fn test_reporter_and_error_carry_identical_text() {
    let reporter = RecordingReporter::default();
    let messages = reporter.messages.clone();

    let mut migration = Migration::new(8, "announced").up(CreateTable::new("t"));
    let validator = MigrationValidator::new(ConventionSet::default())
        .with_reporter(Box::new(reporter));

    let err = validator.validate(&mut migration, Direction::Up).unwrap_err();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], err.to_string());
}

#[test]
fn test_custom_default_schema_is_used() {
    let mut migration = Migration::new(9, "tenanted")
        .up(CreateTable::new("users").column(ColumnDef::new("id", ColumnType::BigInt)));

    let conventions = ConventionSet::new().with_default_schema("tenant_a");
    let validator = MigrationValidator::new(conventions);
    validator.validate(&mut migration, Direction::Up).unwrap();

    let MigrationExpr::CreateTable(table) = &migration.up[0] else {
        panic!("expected CreateTable");
    };
    assert_eq!(table.schema.as_deref(), Some("tenant_a"));
}

#[test]
fn test_loader_interchange_shape() {
    // Pins the externally-tagged layout the loader relies on.
    let migration = Migration::new(10, "shape")
        .up(AddColumn::new("users", ColumnDef::new("age", ColumnType::Int).not_null()));

    let json = serde_json::to_value(&migration).unwrap();
    assert_eq!(json["id"]["version"], 10);
    assert_eq!(json["up"][0]["AddColumn"]["table"], "users");

    let roundtrip: Migration = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, migration);
}
