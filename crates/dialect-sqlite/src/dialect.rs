//! SQLite dialect implementation.

use std::borrow::Cow;

use dialect_core::{
    AbstractColumnType, Capabilities, Classification, Dialect, DialectError, Feature, Result,
    ScrollMode, TypeMappingTable,
};
use tracing::{debug, warn};

use crate::classify::ErrorClassifier;
use crate::config::SqliteDialectConfig;
use crate::functions::FunctionRegistry;
use crate::identity::IdentityColumnSupport;
use crate::limit::LimitHandler;
use crate::types::{StorageClass, sqlite_type_table};
use crate::unique::UniqueDelegate;

/// SQLite capability flags.
pub const SQLITE_CAPABILITIES: Capabilities = Capabilities {
    can_create_schema: false,
    has_alter_table: false,
    drop_constraints: false,
    qualify_index_name: false,
    // https://www.sqlite.org/limits.html#max_variable_number
    in_expression_count_limit: 1000,
    supports_comment_on: true,
    supports_if_exists_before_table_name: true,
    supports_union_all: true,
    supports_tuple_distinct_counts: false,
    supports_lock_timeouts: false,
    supports_outer_join_for_update: false,
    supports_limit: true,
    bind_limit_parameters_in_reverse_order: true,
    supports_identity_columns: true,
    supports_current_timestamp_selection: true,
    is_current_timestamp_select_callable: false,
    read_committed_causes_writers_to_block_readers: true,
    repeatable_read_causes_readers_to_block_writers: true,
    default_scroll_mode: ScrollMode::ForwardOnly,
};

/// SQLite dialect.
///
/// Built once and then only read; share it freely between threads.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    config: SqliteDialectConfig,
    types: TypeMappingTable<StorageClass>,
    functions: FunctionRegistry,
    identity: IdentityColumnSupport,
    limit: LimitHandler,
    unique: UniqueDelegate,
    classifier: ErrorClassifier,
}

impl SqliteDialect {
    /// Creates a SQLite dialect with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails if the type table is not total.
    pub fn new() -> Result<Self> {
        Self::with_config(SqliteDialectConfig::default())
    }

    /// Creates a SQLite dialect with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Fails if the type table is not total.
    pub fn with_config(config: SqliteDialectConfig) -> Result<Self> {
        let dialect = Self {
            types: sqlite_type_table()?,
            functions: FunctionRegistry::sqlite(),
            identity: IdentityColumnSupport::new(config.identity),
            limit: LimitHandler::new(),
            unique: UniqueDelegate::new(),
            classifier: ErrorClassifier::new(),
            config,
        };
        debug!(identity = ?dialect.config.identity, "sqlite dialect ready");
        Ok(dialect)
    }

    /// Returns the configuration this dialect was built with.
    #[must_use]
    pub const fn config(&self) -> &SqliteDialectConfig {
        &self.config
    }

    /// Returns the abstract-type table.
    #[must_use]
    pub const fn type_table(&self) -> &TypeMappingTable<StorageClass> {
        &self.types
    }

    /// Returns the function registry.
    #[must_use]
    pub const fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Returns the identity column support.
    #[must_use]
    pub const fn identity_column_support(&self) -> &IdentityColumnSupport {
        &self.identity
    }

    /// Returns the paging handler.
    #[must_use]
    pub const fn limit_handler(&self) -> &LimitHandler {
        &self.limit
    }

    /// Returns the unique delegate.
    #[must_use]
    pub const fn unique_delegate(&self) -> &UniqueDelegate {
        &self.unique
    }

    /// Returns the error classifier.
    #[must_use]
    pub const fn error_classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Appends the paging clause to `sql`.
    #[must_use]
    pub fn paging_sql(&self, sql: &str, has_offset: bool) -> String {
        self.limit.process_sql(sql, has_offset)
    }

    /// Unique index over `columns`, standing in for a unique key.
    #[must_use]
    pub fn add_unique_key_string(&self, name: &str, table: &str, columns: &[&str]) -> String {
        self.unique.add_unique_key_command(self, name, table, columns)
    }

    /// Drops a unique key added with [`Self::add_unique_key_string`].
    #[must_use]
    pub fn drop_unique_key_string(&self, name: &str) -> String {
        self.unique.drop_unique_key_command(self, name)
    }

    /// Row-locking clause; empty because SQLite locks the whole database.
    #[must_use]
    pub const fn for_update_string(&self) -> &'static str {
        ""
    }

    /// Keyword sequence used in `alter table <t> add column <def>`.
    #[must_use]
    pub const fn add_column_string(&self) -> &'static str {
        "add column"
    }

    /// Query producing the current timestamp.
    #[must_use]
    pub const fn current_timestamp_select_string(&self) -> &'static str {
        "select current_timestamp"
    }

    /// Query producing 32 random hexadecimal characters.
    ///
    /// The value is not an RFC 4122 UUID: it has no version or variant bits
    /// and no dashes.
    #[must_use]
    pub const fn select_guid_string(&self) -> &'static str {
        "select hex(randomblob(16))"
    }

    /// Drop-foreign-key clause.
    ///
    /// # Errors
    ///
    /// Always fails: SQLite has no syntax for dropping a foreign key.
    pub fn drop_foreign_key_string(&self) -> Result<String> {
        Err(self.unsupported(Feature::DropForeignKey))
    }

    /// Add-foreign-key clause.
    ///
    /// # Errors
    ///
    /// Always fails: foreign keys can only be declared in `create table`.
    pub fn add_foreign_key_constraint_string(
        &self,
        _constraint_name: &str,
        _foreign_key: &[&str],
        _referenced_table: &str,
        _primary_key: &[&str],
        _references_primary_key: bool,
    ) -> Result<String> {
        Err(self.unsupported(Feature::AddForeignKey))
    }

    /// Add-primary-key clause.
    ///
    /// # Errors
    ///
    /// Always fails: primary keys can only be declared in `create table`.
    pub fn add_primary_key_constraint_string(&self, _constraint_name: &str) -> Result<String> {
        Err(self.unsupported(Feature::AddPrimaryKey))
    }

    fn unsupported(&self, feature: Feature) -> DialectError {
        warn!(operation = feature.name(), "unsupported ddl requested");
        DialectError::Unsupported {
            dialect: self.name(),
            operation: feature.name(),
        }
    }
}

impl Dialect for SqliteDialect {
    type Physical = StorageClass;

    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn capabilities(&self) -> &Capabilities {
        &SQLITE_CAPABILITIES
    }

    fn physical_type_for(&self, ty: AbstractColumnType) -> StorageClass {
        self.types.physical_type_for(ty)
    }

    fn fragment(&self, feature: Feature) -> Result<Cow<'static, str>> {
        let fragment = match feature {
            Feature::ForUpdate => self.for_update_string(),
            Feature::ColumnUnique => self.unique.column_definition_uniqueness_fragment(),
            Feature::IdentityColumn => self.identity.identity_column_string(),
            Feature::IdentitySelect => self.identity.identity_select_string(),
            Feature::AddColumn => self.add_column_string(),
            Feature::SelectGuid => self.select_guid_string(),
            Feature::CurrentTimestamp => self.current_timestamp_select_string(),
            Feature::DropForeignKey | Feature::AddForeignKey | Feature::AddPrimaryKey => {
                return Err(self.unsupported(feature));
            }
        };
        Ok(Cow::Borrowed(fragment))
    }

    fn classify(&self, native_code: i32, message: &str) -> Classification {
        self.classifier.classify(native_code, message)
    }
}
