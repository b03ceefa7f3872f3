//! Migration identity and expression sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::MigrationExpr;

/// Which expression sequence of a migration a validation pass covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Identifies one schema-change unit.
///
/// Cheap to clone; this is the "migration reference" carried by validation
/// failures and reporter announcements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationId {
    pub version: i64,
    pub name: String,
}

impl MigrationId {
    pub fn new(version: i64, name: impl Into<String>) -> Self {
        Self {
            version,
            name: name.into(),
        }
    }
}

impl fmt::Display for MigrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.version, self.name)
    }
}

/// One versioned unit of schema change.
///
/// Built by the loader, immutable once loaded except for in-place
/// convention application during validation, consumed once per execution
/// attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub id: MigrationId,
    #[serde(default)]
    pub up: Vec<MigrationExpr>,
    #[serde(default)]
    pub down: Vec<MigrationExpr>,
}

impl Migration {
    pub fn new(version: i64, name: impl Into<String>) -> Self {
        Self {
            id: MigrationId::new(version, name),
            up: Vec::new(),
            down: Vec::new(),
        }
    }

    /// Append an expression to the up sequence.
    pub fn up(mut self, expr: impl Into<MigrationExpr>) -> Self {
        self.up.push(expr.into());
        self
    }

    /// Append an expression to the down sequence.
    pub fn down(mut self, expr: impl Into<MigrationExpr>) -> Self {
        self.down.push(expr.into());
        self
    }

    pub fn expressions(&self, direction: Direction) -> &[MigrationExpr] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    pub fn expressions_mut(&mut self, direction: Direction) -> &mut [MigrationExpr] {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{CreateTable, DropTable, Expression};

    #[test]
    fn test_id_display() {
        let id = MigrationId::new(20240101120000, "create_users");
        assert_eq!(id.to_string(), "20240101120000_create_users");
    }

    #[test]
    fn test_builder_routes_directions() {
        let migration = Migration::new(1, "users")
            .up(CreateTable::new("users"))
            .down(DropTable::new("users"));

        assert_eq!(migration.expressions(Direction::Up).len(), 1);
        assert_eq!(migration.expressions(Direction::Down).len(), 1);
        assert_eq!(
            migration.expressions(Direction::Down)[0].variant_name(),
            "DropTable"
        );
    }
}
