//! Error types and the portable error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AbstractColumnType;

/// Errors raised by dialect adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// The engine has no syntax for the requested DDL operation.
    #[error("operation not supported by the {dialect} dialect: {operation}")]
    Unsupported {
        /// Dialect name.
        dialect: &'static str,
        /// The operation that was requested.
        operation: &'static str,
    },

    /// An abstract type was never registered in the type table.
    #[error("no physical type registered for {0}")]
    UnmappedType(AbstractColumnType),

    /// An abstract type was registered more than once.
    #[error("physical type registered twice for {0}")]
    DuplicateMapping(AbstractColumnType),

    /// A numeric type code that names no abstract type.
    #[error("unknown type code: {0}")]
    UnknownTypeCode(i32),

    /// The function registry has no entry for this name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A function template references an argument that was not supplied.
    #[error("function '{function}' needs argument ?{position}")]
    MissingFunctionArgument {
        /// Function name.
        function: String,
        /// One-based argument position referenced by the template.
        position: usize,
    },

    /// The arguments don't fit any shape the function accepts.
    #[error("invalid arguments for function '{function}': expected {expected}")]
    InvalidFunctionArguments {
        /// Function name.
        function: String,
        /// The accepted argument shape.
        expected: &'static str,
    },
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;

/// Portable category for a native driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Value out of range or of an incompatible type.
    DataException,
    /// Transient lock contention; the operation may be retried.
    LockAcquisitionException,
    /// I/O, protocol or corruption failure; the session is likely unusable.
    ConnectionException,
    /// A constraint rejected the statement.
    ConstraintViolation,
    /// No rule matched.
    Unclassified,
}

impl ErrorCategory {
    /// Returns whether a retry with backoff may succeed.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::LockAcquisitionException)
    }
}

/// The outcome of classifying a native error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Portable category.
    pub category: ErrorCategory,
    /// Native code after masking to its primary component.
    pub code: i32,
    /// Name of the violated constraint, when one could be extracted.
    pub constraint_name: Option<String>,
}

impl Classification {
    /// Creates a classification without a constraint name.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: i32) -> Self {
        Self {
            category,
            code,
            constraint_name: None,
        }
    }

    /// Attaches an extracted constraint name.
    #[must_use]
    pub fn with_constraint_name(mut self, name: Option<String>) -> Self {
        self.constraint_name = name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_lock_errors_are_transient() {
        assert!(ErrorCategory::LockAcquisitionException.is_transient());
        assert!(!ErrorCategory::ConnectionException.is_transient());
        assert!(!ErrorCategory::DataException.is_transient());
        assert!(!ErrorCategory::ConstraintViolation.is_transient());
        assert!(!ErrorCategory::Unclassified.is_transient());
    }

    #[test]
    fn test_unsupported_message() {
        let err = DialectError::Unsupported {
            dialect: "sqlite",
            operation: "add primary key",
        };
        assert_eq!(
            err.to_string(),
            "operation not supported by the sqlite dialect: add primary key"
        );
    }

    #[test]
    fn test_invalid_arguments_message() {
        let err = DialectError::InvalidFunctionArguments {
            function: "trim".to_string(),
            expected: "[leading|trailing|both] [chars] from source",
        };
        assert_eq!(
            err.to_string(),
            "invalid arguments for function 'trim': expected [leading|trailing|both] [chars] from source"
        );
    }

    #[test]
    fn test_classification_builder() {
        let c = Classification::new(ErrorCategory::ConstraintViolation, 19)
            .with_constraint_name(Some("users.name".to_string()));
        assert_eq!(c.constraint_name.as_deref(), Some("users.name"));
        assert_eq!(c.code, 19);
    }
}
