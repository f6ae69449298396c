//! Static capability flags and feature identifiers.
//!
//! Callers check these before generating DDL or queries so they never ask an
//! engine for syntax it does not have.

use serde::{Deserialize, Serialize};

/// How a result cursor may be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    /// Rows can only be read front to back.
    ForwardOnly,
    /// Scrollable, not sensitive to concurrent changes.
    ScrollInsensitive,
    /// Scrollable and sensitive to concurrent changes.
    ScrollSensitive,
}

/// Structural and query capabilities of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Supports `CREATE SCHEMA`.
    pub can_create_schema: bool,
    /// Supports `ALTER TABLE` beyond adding columns.
    pub has_alter_table: bool,
    /// Constraints can be dropped before tables are dropped.
    pub drop_constraints: bool,
    /// Index names must be schema-qualified.
    pub qualify_index_name: bool,
    /// Maximum number of elements in an `IN (...)` list; `0` means unbounded.
    pub in_expression_count_limit: usize,
    /// Supports `COMMENT ON`.
    pub supports_comment_on: bool,
    /// Supports `DROP TABLE IF EXISTS <name>`.
    pub supports_if_exists_before_table_name: bool,
    /// Supports `UNION ALL`.
    pub supports_union_all: bool,
    /// Supports `count(distinct (a, b))`.
    pub supports_tuple_distinct_counts: bool,
    /// Supports row lock timeouts.
    pub supports_lock_timeouts: bool,
    /// Supports `FOR UPDATE` on outer joins.
    pub supports_outer_join_for_update: bool,
    /// Supports `LIMIT`.
    pub supports_limit: bool,
    /// Limit and offset placeholders appear in the opposite order of the
    /// portable `(offset, limit)` pair.
    pub bind_limit_parameters_in_reverse_order: bool,
    /// Supports identity (auto-generated key) columns.
    pub supports_identity_columns: bool,
    /// Supports selecting the current timestamp.
    pub supports_current_timestamp_selection: bool,
    /// The current-timestamp select is a callable statement.
    pub is_current_timestamp_select_callable: bool,
    /// Under read committed, writers block readers.
    pub read_committed_causes_writers_to_block_readers: bool,
    /// Under repeatable read, readers block writers.
    pub repeatable_read_causes_readers_to_block_writers: bool,
    /// Default cursor scroll mode.
    pub default_scroll_mode: ScrollMode,
}

/// A SQL fragment a dialect can be asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Row-locking clause appended to a select.
    ForUpdate,
    /// Uniqueness suffix for a column definition.
    ColumnUnique,
    /// Declaration of an identity column.
    IdentityColumn,
    /// Query returning the last generated identity.
    IdentitySelect,
    /// Keyword sequence for adding a column.
    AddColumn,
    /// Query producing a fresh GUID.
    SelectGuid,
    /// Query producing the current timestamp.
    CurrentTimestamp,
    /// Clause dropping a foreign key.
    DropForeignKey,
    /// Clause adding a foreign key constraint.
    AddForeignKey,
    /// Clause adding a primary key constraint.
    AddPrimaryKey,
}

impl Feature {
    /// Every feature.
    pub const ALL: [Self; 10] = [
        Self::ForUpdate,
        Self::ColumnUnique,
        Self::IdentityColumn,
        Self::IdentitySelect,
        Self::AddColumn,
        Self::SelectGuid,
        Self::CurrentTimestamp,
        Self::DropForeignKey,
        Self::AddForeignKey,
        Self::AddPrimaryKey,
    ];

    /// Human-readable operation name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ForUpdate => "for update",
            Self::ColumnUnique => "column unique",
            Self::IdentityColumn => "identity column",
            Self::IdentitySelect => "identity select",
            Self::AddColumn => "add column",
            Self::SelectGuid => "select guid",
            Self::CurrentTimestamp => "current timestamp",
            Self::DropForeignKey => "drop foreign key",
            Self::AddForeignKey => "add foreign key",
            Self::AddPrimaryKey => "add primary key",
        }
    }
}
