//! Column type enumeration.
//!
//! A closed set of types a column definition can carry. Keeping this an
//! enum rather than free-form strings lets validation reason about what a
//! type supports before any SQL dialect is involved; rendering to dialect
//! SQL belongs to the generator, not here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrataError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    /// NUMERIC with optional (precision, scale).
    Decimal(Option<(u8, u8)>),
    /// Fixed-width character type with optional length.
    Char(Option<u16>),
    /// Variable-width character type with optional length limit.
    Varchar(Option<u16>),
    Text,
    Binary,
    Uuid,
    Date,
    Time,
    DateTime,
    Json,
    /// Escape hatch for dialect-specific types; handed to the generator
    /// verbatim.
    Custom(String),
}

impl ColumnType {
    /// Kind label used in validation messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::SmallInt => "smallint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal(_) => "decimal",
            Self::Char(_) => "char",
            Self::Varchar(_) => "varchar",
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Json => "json",
            Self::Custom(name) => name,
        }
    }

    /// Whether an identity (auto-increment) column may use this type.
    pub const fn can_auto_increment(&self) -> bool {
        matches!(self, Self::SmallInt | Self::Int | Self::BigInt)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(Some((precision, scale))) => write!(f, "decimal({precision},{scale})"),
            Self::Char(Some(len)) => write!(f, "char({len})"),
            Self::Varchar(Some(len)) => write!(f, "varchar({len})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for ColumnType {
    type Err = StrataError;

    /// Resolve a loader-supplied type name. Aliases cover the spellings
    /// common across dialects; anything unrecognized is an error rather
    /// than an implicit [`ColumnType::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Boolean),
            "smallint" | "int2" => Ok(Self::SmallInt),
            "int" | "integer" | "int4" => Ok(Self::Int),
            "bigint" | "int8" => Ok(Self::BigInt),
            "float" | "real" | "float4" => Ok(Self::Float),
            "double" | "double precision" | "float8" => Ok(Self::Double),
            "decimal" | "numeric" => Ok(Self::Decimal(None)),
            "char" => Ok(Self::Char(None)),
            "varchar" => Ok(Self::Varchar(None)),
            "text" | "string" => Ok(Self::Text),
            "binary" | "bytea" | "blob" => Ok(Self::Binary),
            "uuid" => Ok(Self::Uuid),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "datetime" | "timestamp" => Ok(Self::DateTime),
            "json" | "jsonb" => Ok(Self::Json),
            other => Err(StrataError::UnknownColumnType(other.to_string())),
        }
    }
}
