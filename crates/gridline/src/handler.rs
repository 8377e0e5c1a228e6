//! Callback handles carried by columns and tables.
//!
//! The engine never performs side effects itself. It reports what happened
//! (a header was clicked, a document was requested) through these handles,
//! which wrap shared closures so column definitions stay `Clone`.

use std::fmt;
use std::sync::Arc;

use gridline_sort::SortDirection;

use crate::cells::ActionKind;
use crate::row::Row;

/// A shared, thread-safe callback.
///
/// Use the type aliases below rather than this type directly.
pub struct Handler<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Clone for Handler<F> {
    fn clone(&self) -> Self {
        Handler(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for Handler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Called with the filename and row when a document cell is activated.
pub type DocumentHandler = Handler<dyn Fn(&str, &Row) + Send + Sync>;

/// Called with the action, its display text and the row when an action cell is clicked.
pub type ActionHandler = Handler<dyn Fn(ActionKind, &str, &Row) + Send + Sync>;

/// Called with the column key and new direction after a header click.
pub type SortHandler = Handler<dyn Fn(&str, SortDirection) + Send + Sync>;

/// Called with the row and its source index when a data row is clicked.
pub type RowClickHandler = Handler<dyn Fn(&Row, usize) + Send + Sync>;

/// Called with the source index of a group header when it is toggled.
pub type GroupToggleHandler = Handler<dyn Fn(usize) + Send + Sync>;

impl DocumentHandler {
    /// Wraps a document callback.
    pub fn new(f: impl Fn(&str, &Row) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    pub(crate) fn call(&self, filename: &str, row: &Row) {
        (self.0)(filename, row)
    }
}

impl ActionHandler {
    /// Wraps an action callback.
    pub fn new(f: impl Fn(ActionKind, &str, &Row) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    pub(crate) fn call(&self, action: ActionKind, label: &str, row: &Row) {
        (self.0)(action, label, row)
    }
}

impl SortHandler {
    /// Wraps a sort callback.
    pub fn new(f: impl Fn(&str, SortDirection) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    pub(crate) fn call(&self, column: &str, direction: SortDirection) {
        (self.0)(column, direction)
    }
}

impl RowClickHandler {
    /// Wraps a row-click callback.
    pub fn new(f: impl Fn(&Row, usize) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    pub(crate) fn call(&self, row: &Row, index: usize) {
        (self.0)(row, index)
    }
}

impl GroupToggleHandler {
    /// Wraps a group-toggle callback.
    pub fn new(f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    pub(crate) fn call(&self, index: usize) {
        (self.0)(index)
    }
}
