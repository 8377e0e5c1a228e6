//! Column model.
//!
//! A [`Column`] describes one table column: which row field it reads, how it
//! is labelled, whether it sorts, its declared width and alignment, and the
//! [`CellKind`] that decides how its cells render.

mod kind;
mod types;

pub use kind::{Affordance, ActionCell, CellKind, CompositeCell, Direction, DocumentCell};
pub use types::{Align, Column, WidthHint};

use std::collections::HashSet;

use crate::error::{Result, TableError};

/// Checks that every column has a non-empty, unique key.
pub fn validate_columns(columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, column) in columns.iter().enumerate() {
        if column.key.is_empty() {
            return Err(TableError::EmptyColumnKey(i));
        }
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(column.key.clone()));
        }
    }
    Ok(())
}

/// Finds a column by key.
pub fn find_column<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.key == key)
}
