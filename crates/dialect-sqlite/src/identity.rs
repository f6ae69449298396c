//! Identity (auto-generated key) columns.
//!
//! SQLite gives every ordinary table a 64-bit rowid, and an `integer primary
//! key` column becomes an alias for it. The keyword `autoincrement` only
//! changes whether deleted rowids may be reused, so it is opt-in through
//! [`IdentityStyle::Autoincrement`].

use crate::config::IdentityStyle;

/// Identity column syntax for SQLite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityColumnSupport {
    style: IdentityStyle,
}

impl IdentityColumnSupport {
    /// Creates identity support for the given style.
    #[must_use]
    pub const fn new(style: IdentityStyle) -> Self {
        Self { style }
    }

    /// Returns the configured style.
    #[must_use]
    pub const fn style(&self) -> IdentityStyle {
        self.style
    }

    /// Identity columns are always supported.
    #[must_use]
    pub const fn supports_identity_columns(&self) -> bool {
        true
    }

    /// Returns whether the column's SQL type precedes the identity string.
    #[must_use]
    pub const fn has_data_type_in_identity_column(&self) -> bool {
        matches!(self.style, IdentityStyle::Autoincrement)
    }

    /// Returns the identity column declaration.
    #[must_use]
    pub const fn identity_column_string(&self) -> &'static str {
        match self.style {
            IdentityStyle::Rowid => "integer",
            IdentityStyle::Autoincrement => "primary key autoincrement",
        }
    }

    /// Returns the query fetching the last generated identity.
    ///
    /// Identical for every table and column.
    #[must_use]
    pub const fn identity_select_string(&self) -> &'static str {
        "select last_insert_rowid()"
    }

    /// Renders the declaration of identity column `name` whose regular type
    /// is `type_name`.
    #[must_use]
    pub fn column_definition(&self, name: &str, type_name: &str) -> String {
        if self.has_data_type_in_identity_column() {
            format!("{name} {type_name} {}", self.identity_column_string())
        } else {
            format!("{name} {}", self.identity_column_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rowid_style() {
        let identity = IdentityColumnSupport::default();
        assert!(identity.supports_identity_columns());
        assert!(!identity.has_data_type_in_identity_column());
        assert_eq!(identity.identity_column_string(), "integer");
        assert_eq!(identity.column_definition("id", "INTEGER"), "id integer");
    }

    #[test]
    fn test_autoincrement_style() {
        let identity = IdentityColumnSupport::new(IdentityStyle::Autoincrement);
        assert!(identity.has_data_type_in_identity_column());
        assert_eq!(
            identity.column_definition("id", "INTEGER"),
            "id INTEGER primary key autoincrement"
        );
    }

    #[test]
    fn test_identity_select() {
        for style in [IdentityStyle::Rowid, IdentityStyle::Autoincrement] {
            assert_eq!(
                IdentityColumnSupport::new(style).identity_select_string(),
                "select last_insert_rowid()"
            );
        }
    }
}
