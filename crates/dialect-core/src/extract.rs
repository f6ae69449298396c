//! Pulling a constraint name out of a native error message.

/// Returns the text between `start` and the first `end` that follows it.
///
/// Returns `None` when either marker is missing.
///
/// ```rust
/// use dialect_core::extract_using_template;
///
/// let message = "constraint users.name unique failed";
/// assert_eq!(
///     extract_using_template("constraint ", " failed", message),
///     Some("users.name unique")
/// );
/// assert_eq!(extract_using_template("constraint ", " failed", "constraint x"), None);
/// ```
#[must_use]
pub fn extract_using_template<'a>(start: &str, end: &str, message: &'a str) -> Option<&'a str> {
    let from = message.find(start)? + start.len();
    let rest = &message[from..];
    let to = rest.find(end)?;
    Some(&rest[..to])
}
