//! SQLite storage classes and the abstract-type table.
//!
//! SQLite stores every value in one of five storage classes regardless of
//! the declared column type (see [Datatypes In SQLite]). The table below only
//! exists so schema tools that expect typed columns produce valid DDL.
//!
//! [Datatypes In SQLite]: https://www.sqlite.org/datatype3.html

use std::fmt;

use dialect_core::{AbstractColumnType, Result, TypeMappingTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of SQLite's storage classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageClass {
    /// `NULL`
    Null,
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `TEXT`
    Text,
    /// `BLOB`
    Blob,
}

impl StorageClass {
    /// Every storage class SQLite knows.
    pub const ALL: [Self; 5] = [
        Self::Null,
        Self::Integer,
        Self::Real,
        Self::Text,
        Self::Blob,
    ];

    /// Returns the keyword used in DDL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the SQLite type table.
///
/// # Errors
///
/// Fails if the groups leave an abstract type unmapped or map one twice.
pub fn sqlite_type_table() -> Result<TypeMappingTable<StorageClass>> {
    let table = TypeMappingTable::builder()
        .register(AbstractColumnType::Null, StorageClass::Null)
        .register_group(AbstractColumnType::INTEGER_LIKE, StorageClass::Integer)
        .register_group(AbstractColumnType::REAL_LIKE, StorageClass::Real)
        .register_group(AbstractColumnType::TEXT_LIKE, StorageClass::Text)
        .register_group(AbstractColumnType::BLOB_LIKE, StorageClass::Blob)
        .build()?;
    debug!(
        types = AbstractColumnType::ALL.len(),
        "registered sqlite storage classes"
    );
    Ok(table)
}
