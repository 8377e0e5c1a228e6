//! Row sorting on top of `gridline-sort`.
//!
//! A row contributes the text content of its cell at the sort key: fragments
//! give their text, composite parts the concatenation of theirs, missing
//! cells an empty key.

use gridline_sort::{apply_order, sort_indices, SortKey, SortState};

use crate::column::Column;
use crate::row::Row;

/// Sort key of `row` for `column`.
pub fn row_key(row: &Row, column: &str) -> SortKey {
    match row.get(column) {
        Some(value) if !value.is_empty() => SortKey::new(&value.text_content()),
        _ => SortKey::empty(),
    }
}

/// Display order of `rows` as source indices.
///
/// Returns the identity order when nothing is sorted or the sort column is
/// not among `columns`.
///
/// ```
/// use gridline::{sort_rows, Column, Row, SortState};
///
/// let columns = vec![Column::new("name", "Name"), Column::new("amount", "Amount")];
/// let rows = vec![
///     Row::new().cell("name", "B").cell("amount", "$10"),
///     Row::new().cell("name", "A").cell("amount", "$5"),
/// ];
///
/// assert_eq!(sort_rows(&rows, &SortState::asc("amount"), &columns), vec![1, 0]);
/// assert_eq!(sort_rows(&rows, &SortState::desc("name"), &columns), vec![0, 1]);
/// assert_eq!(sort_rows(&rows, &SortState::asc("missing"), &columns), vec![0, 1]);
/// ```
pub fn sort_rows<'a, I>(rows: &[Row], state: &SortState, columns: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Column>,
{
    let known = match state.column() {
        Some(key) => columns.into_iter().any(|c| c.key == key),
        None => false,
    };
    if !known {
        return (0..rows.len()).collect();
    }
    sort_indices(rows, state, row_key)
}

/// Sorted copy of `rows`.
pub fn sorted_rows<'a, I>(rows: &[Row], state: &SortState, columns: I) -> Vec<Row>
where
    I: IntoIterator<Item = &'a Column>,
{
    let order = sort_rows(rows, state, columns);
    apply_order(rows, &order)
}
