//! # dialect-sqlite
//!
//! A SQLite adapter for `dialect-core`: tells a portable data-access layer
//! which storage class backs each column type, which SQL fragments SQLite
//! understands, and what a native SQLite error means.
//!
//! # How SQLite differs from other dialects
//!
//! - **[Storage classes]**: every value is `NULL`, `INTEGER`, `REAL`,
//!   `TEXT` or `BLOB`, whatever the declared column type. Abstract types
//!   are mapped onto these five so generated DDL stays conventional.
//! - **Limited [ALTER TABLE]**: only `RENAME TABLE`, `RENAME COLUMN`,
//!   `ADD COLUMN` and `DROP COLUMN`. Foreign and primary keys can not be
//!   added afterwards, so asking for that DDL fails with
//!   [`DialectError::Unsupported`](dialect_core::DialectError::Unsupported).
//! - **[Rowid] identity**: an `integer` primary key aliases the rowid;
//!   `autoincrement` is opt-in via [`IdentityStyle`].
//! - **Paging**: `limit ? offset ?`, with the limit placeholder before the
//!   offset placeholder (see [`LimitHandler`]).
//! - **[Locking]**: one writer at a time for the whole database. Under read
//!   committed writers block readers, under repeatable read readers block
//!   writers. `SQLITE_BUSY` and `SQLITE_LOCKED` are classified as transient
//!   lock errors.
//! - **[Result codes]**: extended codes carry the primary code in their low
//!   byte; classification always masks first.
//!
//! [Storage classes]: https://www.sqlite.org/datatype3.html
//! [ALTER TABLE]: https://www.sqlite.org/lang_altertable.html
//! [Rowid]: https://www.sqlite.org/autoinc.html
//! [Locking]: https://www.sqlite.org/lockingv3.html
//! [Result codes]: https://www.sqlite.org/rescode.html
//!
//! ## Example
//!
//! ```rust
//! use dialect_core::{AbstractColumnType, Dialect, ErrorCategory, Feature};
//! use dialect_sqlite::{SqliteDialect, StorageClass};
//!
//! let dialect = SqliteDialect::new().unwrap();
//!
//! assert_eq!(
//!     dialect.physical_type_for(AbstractColumnType::Varchar),
//!     StorageClass::Text
//! );
//! assert_eq!(
//!     dialect.fragment(Feature::IdentitySelect).unwrap(),
//!     "select last_insert_rowid()"
//! );
//! assert!(dialect.fragment(Feature::AddPrimaryKey).is_err());
//!
//! // SQLITE_BUSY_RECOVERY masks to SQLITE_BUSY.
//! let classification = dialect.classify(0x0105, "database is locked");
//! assert_eq!(classification.category, ErrorCategory::LockAcquisitionException);
//! ```

pub mod classify;
pub mod codes;
pub mod config;
mod dialect;
pub mod functions;
pub mod identity;
pub mod limit;
pub mod types;
pub mod unique;

pub use classify::ErrorClassifier;
pub use config::{IdentityStyle, SqliteDialectConfig};
pub use dialect::{SQLITE_CAPABILITIES, SqliteDialect};
pub use functions::{FunctionRegistry, SqlFunction, TrimSpec};
pub use identity::IdentityColumnSupport;
pub use limit::{LimitBinding, LimitHandler, LimitParameter, RowSelection};
pub use types::StorageClass;
pub use unique::UniqueDelegate;
