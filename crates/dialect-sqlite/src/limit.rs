//! Paging with `LIMIT` and `OFFSET`.
//!
//! The fragment is always `limit ?` or `limit ? offset ?`. The portable
//! parameter order is `(offset, limit)`; SQLite places them the other way
//! round, so the handler reports reverse binding: the offset is bound first
//! but lands on the placeholder after the limit.

/// Which window was requested from a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSelection {
    /// Number of rows to skip.
    pub first_row: Option<i64>,
    /// Maximum number of rows to return.
    pub max_rows: Option<i64>,
}

impl RowSelection {
    /// Creates a selection of at most `max_rows` rows starting at `first_row`.
    #[must_use]
    pub const fn new(first_row: Option<i64>, max_rows: Option<i64>) -> Self {
        Self {
            first_row,
            max_rows,
        }
    }

    /// Returns whether rows are skipped.
    #[must_use]
    pub fn has_offset(&self) -> bool {
        self.first_row.is_some_and(|row| row > 0)
    }
}

/// Which paging parameter a binding carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitParameter {
    /// The `offset ?` placeholder.
    Offset,
    /// The `limit ?` placeholder.
    Limit,
}

/// One paging parameter ready to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBinding {
    /// The parameter being bound.
    pub parameter: LimitParameter,
    /// One-based placeholder position.
    pub position: usize,
    /// Value to bind.
    pub value: i64,
}

/// Renders and binds SQLite paging clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitHandler;

impl LimitHandler {
    /// `LIMIT` value meaning "no upper bound" in SQLite.
    pub const UNBOUNDED: i64 = -1;

    /// Creates a limit handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether paging is supported.
    #[must_use]
    pub const fn supports_limit(&self) -> bool {
        true
    }

    /// Returns whether the limit placeholder precedes the offset placeholder.
    #[must_use]
    pub const fn bind_limit_parameters_in_reverse_order(&self) -> bool {
        true
    }

    /// Appends the paging clause to `sql`.
    #[must_use]
    pub fn process_sql(&self, sql: &str, has_offset: bool) -> String {
        if has_offset {
            format!("{sql} limit ? offset ?")
        } else {
            format!("{sql} limit ?")
        }
    }

    /// Appends the paging clause matching `selection` to `sql`.
    #[must_use]
    pub fn process_selection(&self, sql: &str, selection: &RowSelection) -> String {
        self.process_sql(sql, selection.has_offset())
    }

    /// Returns the paging bindings in the order they must be bound.
    ///
    /// `start` is the one-based position of the first paging placeholder.
    /// The offset (when present) comes first and targets `start + 1`; the
    /// limit comes last and targets `start`.
    #[must_use]
    pub fn bindings(&self, selection: &RowSelection, start: usize) -> Vec<LimitBinding> {
        let reverse = self.bind_limit_parameters_in_reverse_order();
        let (offset_position, limit_position) = if reverse {
            (start + 1, start)
        } else {
            (start, start + 1)
        };

        let mut bindings = Vec::with_capacity(2);
        if selection.has_offset() {
            bindings.push(LimitBinding {
                parameter: LimitParameter::Offset,
                position: offset_position,
                value: selection.first_row.unwrap_or_default(),
            });
        }
        bindings.push(LimitBinding {
            parameter: LimitParameter::Limit,
            position: if selection.has_offset() {
                limit_position
            } else {
                start
            },
            value: selection.max_rows.unwrap_or(Self::UNBOUNDED),
        });
        bindings
    }

    /// Returns the paging values sorted by placeholder position.
    #[must_use]
    pub fn values_in_placeholder_order(&self, selection: &RowSelection) -> Vec<i64> {
        let mut bindings = self.bindings(selection, 1);
        bindings.sort_by_key(|binding| binding.position);
        bindings.into_iter().map(|binding| binding.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_offset() {
        let sql = LimitHandler::new().process_sql("select * from users", false);
        assert_eq!(sql, "select * from users limit ?");
    }

    #[test]
    fn test_with_offset() {
        let sql = LimitHandler::new().process_sql("select * from users", true);
        assert!(sql.ends_with("limit ? offset ?"));
    }

    #[test]
    fn test_zero_first_row_is_no_offset() {
        let selection = RowSelection::new(Some(0), Some(10));
        assert!(!selection.has_offset());
        let sql = LimitHandler::new().process_selection("select 1", &selection);
        assert_eq!(sql, "select 1 limit ?");
    }

    #[test]
    fn test_offset_bound_before_limit() {
        let handler = LimitHandler::new();
        assert!(handler.bind_limit_parameters_in_reverse_order());

        let bindings = handler.bindings(&RowSelection::new(Some(20), Some(10)), 1);
        assert_eq!(
            bindings,
            vec![
                LimitBinding {
                    parameter: LimitParameter::Offset,
                    position: 2,
                    value: 20,
                },
                LimitBinding {
                    parameter: LimitParameter::Limit,
                    position: 1,
                    value: 10,
                },
            ]
        );
    }

    #[test]
    fn test_bindings_follow_earlier_parameters() {
        let bindings = LimitHandler::new().bindings(&RowSelection::new(Some(5), Some(3)), 3);
        let positions: Vec<usize> = bindings.iter().map(|b| b.position).collect();
        assert_eq!(positions, vec![4, 3]);
    }

    #[test]
    fn test_limit_only_binding() {
        let bindings = LimitHandler::new().bindings(&RowSelection::new(None, Some(7)), 1);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].parameter, LimitParameter::Limit);
        assert_eq!(bindings[0].position, 1);
        assert_eq!(bindings[0].value, 7);
    }

    #[test]
    fn test_values_in_placeholder_order() {
        let handler = LimitHandler::new();
        let values = handler.values_in_placeholder_order(&RowSelection::new(Some(20), Some(10)));
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn test_missing_max_rows_is_unbounded() {
        let values = LimitHandler::new().values_in_placeholder_order(&RowSelection::new(Some(4), None));
        assert_eq!(values, vec![LimitHandler::UNBOUNDED, 4]);
    }
}
