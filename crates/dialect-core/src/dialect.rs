//! The capability-set interface a data-access layer consumes.

use std::borrow::Cow;
use std::fmt::Display;

use crate::capabilities::{Capabilities, Feature};
use crate::error::{Classification, Result};
use crate::types::AbstractColumnType;

/// Trait for SQL dialect-specific behavior.
///
/// Implementations are immutable after construction and safe to share
/// between threads.
pub trait Dialect: Send + Sync {
    /// Physical type name emitted in DDL.
    type Physical: Copy + Display;

    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the engine's capability flags.
    fn capabilities(&self) -> &Capabilities;

    /// Returns the physical type backing an abstract column type.
    fn physical_type_for(&self, ty: AbstractColumnType) -> Self::Physical;

    /// Renders a SQL fragment.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`](crate::DialectError::Unsupported)
    /// when the engine has no syntax for `feature`.
    fn fragment(&self, feature: Feature) -> Result<Cow<'static, str>>;

    /// Classifies a native error code and message. Never fails.
    fn classify(&self, native_code: i32, message: &str) -> Classification;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }
}

/// Splits `values` into chunks no larger than the dialect's IN-list limit.
///
/// An empty slice yields no chunks. A limit of `0` means unbounded.
pub fn chunk_in_list<'a, D, T>(dialect: &D, values: &'a [T]) -> impl Iterator<Item = &'a [T]>
where
    D: Dialect + ?Sized,
{
    let size = match dialect.capabilities().in_expression_count_limit {
        0 => values.len().max(1),
        limit => limit,
    };
    values.chunks(size)
}
