//! SQLite primary result codes.
//!
//! Extended result codes carry the primary code in their low byte, so
//! [`primary_code`] is applied before any comparison. See
//! <https://www.sqlite.org/rescode.html>.

/// Successful result.
pub const SQLITE_OK: i32 = 0;
/// Generic error.
pub const SQLITE_ERROR: i32 = 1;
/// Internal logic error in SQLite.
pub const SQLITE_INTERNAL: i32 = 2;
/// Access permission denied.
pub const SQLITE_PERM: i32 = 3;
/// Callback routine requested an abort.
pub const SQLITE_ABORT: i32 = 4;
/// The database file is locked.
pub const SQLITE_BUSY: i32 = 5;
/// A table in the database is locked.
pub const SQLITE_LOCKED: i32 = 6;
/// A `malloc()` failed.
pub const SQLITE_NOMEM: i32 = 7;
/// Attempt to write a read-only database.
pub const SQLITE_READONLY: i32 = 8;
/// Operation terminated by `sqlite3_interrupt()`.
pub const SQLITE_INTERRUPT: i32 = 9;
/// Some kind of disk I/O error occurred.
pub const SQLITE_IOERR: i32 = 10;
/// The database disk image is malformed.
pub const SQLITE_CORRUPT: i32 = 11;
/// Unknown opcode in `sqlite3_file_control()`.
pub const SQLITE_NOTFOUND: i32 = 12;
/// Insertion failed because the database is full.
pub const SQLITE_FULL: i32 = 13;
/// Unable to open the database file.
pub const SQLITE_CANTOPEN: i32 = 14;
/// Database lock protocol error.
pub const SQLITE_PROTOCOL: i32 = 15;
/// Internal use only.
pub const SQLITE_EMPTY: i32 = 16;
/// The database schema changed.
pub const SQLITE_SCHEMA: i32 = 17;
/// String or BLOB exceeds size limit.
pub const SQLITE_TOOBIG: i32 = 18;
/// Abort due to constraint violation.
pub const SQLITE_CONSTRAINT: i32 = 19;
/// Data type mismatch.
pub const SQLITE_MISMATCH: i32 = 20;
/// Library used incorrectly.
pub const SQLITE_MISUSE: i32 = 21;
/// Uses OS features not supported on host.
pub const SQLITE_NOLFS: i32 = 22;
/// Authorization denied.
pub const SQLITE_AUTH: i32 = 23;
/// Not used.
pub const SQLITE_FORMAT: i32 = 24;
/// Second parameter to `sqlite3_bind` out of range.
pub const SQLITE_RANGE: i32 = 25;
/// File opened that is not a database file.
pub const SQLITE_NOTADB: i32 = 26;
/// Notifications from `sqlite3_log()`.
pub const SQLITE_NOTICE: i32 = 27;
/// Warnings from `sqlite3_log()`.
pub const SQLITE_WARNING: i32 = 28;
/// `sqlite3_step()` has another row ready.
pub const SQLITE_ROW: i32 = 100;
/// `sqlite3_step()` has finished executing.
pub const SQLITE_DONE: i32 = 101;

/// Reduces an extended result code to its primary code.
#[must_use]
pub const fn primary_code(code: i32) -> i32 {
    code & 0xFF
}
