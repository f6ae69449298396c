//! Unique constraints.
//!
//! SQLite cannot add constraints to an existing table, so uniqueness is
//! declared on the column and unique keys added later become unique indexes.

use dialect_core::Dialect;

/// Renders uniqueness for SQLite DDL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniqueDelegate;

impl UniqueDelegate {
    /// Creates a unique delegate.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Suffix appended to a unique column definition.
    #[must_use]
    pub const fn column_definition_uniqueness_fragment(&self) -> &'static str {
        " unique"
    }

    /// Table-level unique fragment for `CREATE TABLE`; always empty since
    /// uniqueness is declared per column.
    #[must_use]
    pub const fn table_creation_uniqueness_fragment(&self) -> &'static str {
        ""
    }

    /// Adds a named unique key to an existing table.
    ///
    /// Identifiers are quoted with `dialect`.
    #[must_use]
    pub fn add_unique_key_command<D: Dialect + ?Sized>(
        &self,
        dialect: &D,
        name: &str,
        table: &str,
        columns: &[&str],
    ) -> String {
        let columns = columns
            .iter()
            .map(|column| dialect.quote_identifier(column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "create unique index {} on {} ({columns})",
            dialect.quote_identifier(name),
            dialect.quote_identifier(table)
        )
    }

    /// Drops a unique key created by [`Self::add_unique_key_command`].
    #[must_use]
    pub fn drop_unique_key_command<D: Dialect + ?Sized>(&self, dialect: &D, name: &str) -> String {
        format!("drop index {}", dialect.quote_identifier(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteDialect;

    #[test]
    fn test_column_fragment_appends() {
        let column = format!(
            "email TEXT{}",
            UniqueDelegate::new().column_definition_uniqueness_fragment()
        );
        assert_eq!(column, "email TEXT unique");
    }

    #[test]
    fn test_table_fragment_is_empty() {
        assert!(UniqueDelegate::new().table_creation_uniqueness_fragment().is_empty());
    }

    #[test]
    fn test_unique_key_as_index() {
        let dialect = SqliteDialect::new().unwrap();
        let delegate = UniqueDelegate::new();
        assert_eq!(
            delegate.add_unique_key_command(&dialect, "uk_users_name", "users", &["first", "last"]),
            r#"create unique index "uk_users_name" on "users" ("first", "last")"#
        );
        assert_eq!(
            delegate.drop_unique_key_command(&dialect, "uk_users_name"),
            r#"drop index "uk_users_name""#
        );
    }

    #[test]
    fn test_unique_key_quotes_awkward_identifiers() {
        let dialect = SqliteDialect::new().unwrap();
        assert_eq!(
            UniqueDelegate::new().add_unique_key_command(
                &dialect,
                "uk order",
                "order",
                &["group", "we\"ird"]
            ),
            r#"create unique index "uk order" on "order" ("group", "we""ird")"#
        );
    }
}
