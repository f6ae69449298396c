//! Sorting native SQLite errors into portable categories.

use dialect_core::{Classification, ErrorCategory, extract_using_template};
use tracing::trace;

use crate::codes::{
    SQLITE_BUSY, SQLITE_CONSTRAINT, SQLITE_IOERR, SQLITE_LOCKED, SQLITE_MISMATCH, SQLITE_NOTADB,
    SQLITE_PROTOCOL, SQLITE_TOOBIG, primary_code,
};

/// Classifies native result codes and extracts violated constraint names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    constraint_start: &'static str,
    constraint_end: &'static str,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorClassifier {
    /// Creates a classifier using SQLite's `constraint <name> failed` template.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraint_start: "constraint ",
            constraint_end: " failed",
        }
    }

    /// Classifies a native code and message. Never fails.
    ///
    /// The code is masked to its primary component first, so extended codes
    /// such as `SQLITE_BUSY_RECOVERY` (`0x0105`) behave like their primary
    /// code.
    #[must_use]
    pub fn classify(&self, native_code: i32, message: &str) -> Classification {
        let code = primary_code(native_code);
        let category = category_for(code);
        let classification = Classification::new(category, code)
            .with_constraint_name(self.extract_constraint_name(native_code, message));
        trace!(
            native_code,
            code,
            ?category,
            constraint = classification.constraint_name.as_deref(),
            "classified sqlite error"
        );
        classification
    }

    /// Extracts the violated constraint's name.
    ///
    /// Only attempted for constraint violations; a message that does not
    /// match the template yields `None`.
    #[must_use]
    pub fn extract_constraint_name(&self, native_code: i32, message: &str) -> Option<String> {
        if primary_code(native_code) != SQLITE_CONSTRAINT {
            return None;
        }
        extract_using_template(self.constraint_start, self.constraint_end, message)
            .map(str::to_owned)
    }

    /// Classifies an error returned by `sqlx`.
    ///
    /// Database errors go through [`Self::classify`] with the extended code
    /// reported by the driver. I/O and protocol failures are connection
    /// errors, as are a pool that timed out, was closed or lost its
    /// connection worker. Anything else is unclassified.
    #[must_use]
    pub fn classify_sqlx_error(&self, error: &sqlx::Error) -> Classification {
        match error {
            sqlx::Error::Database(db) => {
                let code = db
                    .code()
                    .and_then(|code| code.parse::<i32>().ok())
                    .unwrap_or(0);
                self.classify(code, db.message())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                Classification::new(ErrorCategory::ConnectionException, 0)
            }
            _ => Classification::new(ErrorCategory::Unclassified, 0),
        }
    }
}

/// Ordered rules mapping a primary code to a category.
const fn category_for(code: i32) -> ErrorCategory {
    match code {
        SQLITE_TOOBIG | SQLITE_MISMATCH => ErrorCategory::DataException,
        SQLITE_BUSY | SQLITE_LOCKED => ErrorCategory::LockAcquisitionException,
        SQLITE_IOERR..=SQLITE_PROTOCOL | SQLITE_NOTADB => ErrorCategory::ConnectionException,
        SQLITE_CONSTRAINT => ErrorCategory::ConstraintViolation,
        _ => ErrorCategory::Unclassified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{SQLITE_CANTOPEN, SQLITE_CORRUPT, SQLITE_ERROR, SQLITE_FULL};

    fn category(code: i32) -> ErrorCategory {
        ErrorClassifier::new().classify(code, "").category
    }

    #[test]
    fn test_lock_codes() {
        assert_eq!(category(5), ErrorCategory::LockAcquisitionException);
        assert_eq!(category(6), ErrorCategory::LockAcquisitionException);
        assert!(category(SQLITE_BUSY).is_transient());
    }

    #[test]
    fn test_data_codes() {
        assert_eq!(category(18), ErrorCategory::DataException);
        assert_eq!(category(20), ErrorCategory::DataException);
    }

    #[test]
    fn test_connection_range_is_inclusive() {
        for code in SQLITE_IOERR..=SQLITE_PROTOCOL {
            assert_eq!(category(code), ErrorCategory::ConnectionException, "code {code}");
        }
        assert_eq!(category(11), ErrorCategory::ConnectionException);
        assert_eq!(category(26), ErrorCategory::ConnectionException);
        assert_eq!(category(SQLITE_CORRUPT), ErrorCategory::ConnectionException);
        assert_eq!(category(SQLITE_FULL), ErrorCategory::ConnectionException);
        assert_eq!(category(SQLITE_CANTOPEN), ErrorCategory::ConnectionException);
    }

    #[test]
    fn test_unmatched_codes_are_unclassified() {
        assert_eq!(category(999), ErrorCategory::Unclassified);
        assert_eq!(category(SQLITE_ERROR), ErrorCategory::Unclassified);
        assert_eq!(category(16), ErrorCategory::Unclassified);
        assert_eq!(category(-1), ErrorCategory::Unclassified);
    }

    #[test]
    fn test_extended_code_matches_primary() {
        let classifier = ErrorClassifier::new();
        let extended = classifier.classify(0x0105, "database is locked");
        let primary = classifier.classify(5, "database is locked");
        assert_eq!(extended, primary);
        assert_eq!(extended.code, 5);
    }

    #[test]
    fn test_constraint_name_extracted() {
        let c = ErrorClassifier::new().classify(19, "constraint users.name unique failed");
        assert_eq!(c.category, ErrorCategory::ConstraintViolation);
        assert_eq!(c.constraint_name.as_deref(), Some("users.name unique"));
    }

    #[test]
    fn test_constraint_name_from_extended_code() {
        // SQLITE_CONSTRAINT_UNIQUE
        let c = ErrorClassifier::new().classify(2067, "constraint idx_email failed");
        assert_eq!(c.constraint_name.as_deref(), Some("idx_email"));
    }

    #[test]
    fn test_malformed_constraint_message() {
        let c = ErrorClassifier::new().classify(19, "constraint users.name unique");
        assert_eq!(c.category, ErrorCategory::ConstraintViolation);
        assert_eq!(c.constraint_name, None);
    }

    #[test]
    fn test_no_extraction_for_other_codes() {
        let c = ErrorClassifier::new().classify(5, "constraint users.name unique failed");
        assert_eq!(c.constraint_name, None);
    }

    #[test]
    fn test_sqlx_io_and_protocol_errors() {
        let classifier = ErrorClassifier::new();
        let io = sqlx::Error::Io(std::io::Error::other("broken pipe"));
        assert_eq!(
            classifier.classify_sqlx_error(&io).category,
            ErrorCategory::ConnectionException
        );
        let protocol = sqlx::Error::Protocol("unexpected response".to_string());
        assert_eq!(
            classifier.classify_sqlx_error(&protocol).category,
            ErrorCategory::ConnectionException
        );
    }

    #[test]
    fn test_sqlx_pool_errors_are_connection_errors() {
        let classifier = ErrorClassifier::new();
        for error in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::WorkerCrashed,
        ] {
            let c = classifier.classify_sqlx_error(&error);
            assert_eq!(c.category, ErrorCategory::ConnectionException, "{error}");
            assert!(!c.category.is_transient());
        }
    }

    #[test]
    fn test_sqlx_other_errors_unclassified() {
        let c = ErrorClassifier::new().classify_sqlx_error(&sqlx::Error::RowNotFound);
        assert_eq!(c.category, ErrorCategory::Unclassified);
        assert_eq!(c.constraint_name, None);
    }
}
