//! # dialect-core
//!
//! The portable side of a SQL dialect adapter.
//!
//! A data-access layer talks about columns, features and errors in
//! engine-neutral terms. A dialect adapter translates those terms for one
//! concrete engine. This crate holds the neutral vocabulary both sides agree
//! on:
//!
//! - [`AbstractColumnType`]: the portable column type space, with its
//!   numeric type codes.
//! - [`TypeMappingTable`]: a validated, total mapping from abstract types to
//!   an engine's physical type names, registered group by group.
//! - [`Capabilities`] and [`ScrollMode`]: static flags describing what DDL
//!   and query features an engine supports.
//! - [`Feature`]: identifiers for the SQL fragments an adapter can render.
//! - [`ErrorCategory`] and [`Classification`]: the portable error taxonomy
//!   native driver errors are sorted into.
//! - [`Dialect`]: the narrow capability-set interface a data-access layer
//!   consumes.
//!
//! ## Example
//!
//! ```rust
//! use dialect_core::{AbstractColumnType, TypeMappingTable};
//!
//! let table = TypeMappingTable::builder()
//!     .register(AbstractColumnType::Null, "NULL")
//!     .register_group(AbstractColumnType::INTEGER_LIKE, "INTEGER")
//!     .register_group(AbstractColumnType::REAL_LIKE, "REAL")
//!     .register_group(AbstractColumnType::TEXT_LIKE, "TEXT")
//!     .register_group(AbstractColumnType::BLOB_LIKE, "BLOB")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.physical_type_for(AbstractColumnType::Varchar), "TEXT");
//! ```

pub mod capabilities;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod types;

pub use capabilities::{Capabilities, Feature, ScrollMode};
pub use dialect::{Dialect, chunk_in_list};
pub use error::{Classification, DialectError, ErrorCategory, Result};
pub use extract::extract_using_template;
pub use types::{AbstractColumnType, TypeMappingTable, TypeMappingTableBuilder};
