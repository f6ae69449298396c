//! Dialect configuration.

use serde::{Deserialize, Serialize};

/// How identity columns are declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStyle {
    /// A bare `integer` column aliasing the rowid. Deleted rowids may be
    /// reused.
    #[default]
    Rowid,
    /// `integer primary key autoincrement`. Rowids are never reused, at the
    /// cost of maintaining `sqlite_sequence`.
    Autoincrement,
}

/// Configuration for [`SqliteDialect`](crate::SqliteDialect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqliteDialectConfig {
    /// Identity column declaration style.
    pub identity: IdentityStyle,
}

impl SqliteDialectConfig {
    /// Sets the identity column style.
    #[must_use]
    pub const fn identity(mut self, identity: IdentityStyle) -> Self {
        self.identity = identity;
        self
    }
}
