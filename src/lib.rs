//! # Strata: schema migrations, validated before they run
//!
//! Strata models a migration as an ordered sequence of schema-change
//! expressions (create table, add column, rename index, ...). Before a
//! runner hands a migration to a SQL generator it pushes every expression
//! through this crate: environment conventions fill in the fields the
//! author left unset, and each expression reports its structural defects.
//! Nothing here touches a database.
//!
//! ## Quick example
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut migration = Migration::new(20240101120000, "create_users")
//!     .up(CreateTable::new("users")
//!         .column(ColumnDef::new("id", ColumnType::BigInt).primary_key())
//!         .column(ColumnDef::new("email", ColumnType::Text).not_null().unique()));
//!
//! let validator = MigrationValidator::new(ConventionSet::default());
//! validator.validate(&mut migration, Direction::Up).unwrap();
//! ```
//!
//! Validation never stops at the first defect: every expression in the
//! sequence is checked, and a failure lists every defective operation in
//! one block, keyed by operation kind.

pub mod collector;
pub mod conventions;
pub mod error;
pub mod expr;
pub mod migration;
pub mod report;
pub mod validator;

pub mod prelude {
    pub use crate::collector::ValidationErrors;
    pub use crate::conventions::ConventionSet;
    pub use crate::error::{StrataError, StrataResult};
    pub use crate::expr::*;
    pub use crate::migration::{Direction, Migration, MigrationId};
    pub use crate::report::{ConsoleReporter, NullReporter, Reporter};
    pub use crate::validator::MigrationValidator;
}
