//! Column width allocation.
//!
//! Columns keep their declared pixel widths, except for one case: when the
//! table fits its container, has a document column, and every other column
//! declares a pixel width, the first document column (the *anchor*) is
//! given a share of the leftover space.
//!
//! ```text
//! remainder = max(container - margin - sum(fixed), min)
//! anchor    = max(floor(remainder * (1 - shrink)), min)
//! ```
//!
//! The result is a fresh list of [`EffectiveColumn`]s; input columns are
//! never modified.

use log::debug;

use crate::column::Column;
use crate::config::LayoutConfig;

/// A column paired with its resolved pixel width.
#[derive(Clone, Copy, Debug)]
pub struct EffectiveColumn<'a> {
    /// The source column.
    pub column: &'a Column,
    /// Resolved width, or `None` when the column has no pixel width.
    pub width: Option<u32>,
    /// Whether this column received the reflowed anchor width.
    pub anchor: bool,
}

impl<'a> EffectiveColumn<'a> {
    fn declared(column: &'a Column) -> Self {
        EffectiveColumn {
            column,
            width: column.fixed_width(),
            anchor: false,
        }
    }
}

/// Resolved layout for a list of columns.
#[derive(Clone, Debug)]
pub struct Allocation<'a> {
    /// One entry per input column, in input order.
    pub columns: Vec<EffectiveColumn<'a>>,
}

impl<'a> Allocation<'a> {
    /// Width of the column at `index`.
    pub fn width(&self, index: usize) -> Option<u32> {
        self.columns.get(index).and_then(|c| c.width)
    }

    /// Index of the reflowed anchor column, if one was sized.
    pub fn anchor_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.anchor)
    }

    /// Sum of all known widths.
    pub fn total(&self) -> u64 {
        self.columns
            .iter()
            .filter_map(|c| c.width)
            .map(u64::from)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Resolves column widths against a measured container width.
///
/// Returns declared widths unchanged when `needs_scroll` is set, when the
/// container has not been measured (`container_width == 0`), when there is
/// no document column, or when any other column lacks a pixel width.
///
/// # Example
///
/// ```
/// use gridline::{allocate, Column, DocumentCell, LayoutConfig};
///
/// let columns = vec![
///     Column::new("name", "Name").document(DocumentCell::default()),
///     Column::new("amount", "Amount").width(120),
///     Column::new("date", "Date").width(100),
/// ];
///
/// let layout = allocate(&columns, 1000, false, &LayoutConfig::default());
/// // remainder = 1000 - 48 - 220 = 732; anchor = floor(732 * 0.7) = 512
/// assert_eq!(layout.width(0), Some(512));
/// assert_eq!(layout.width(1), Some(120));
/// ```
pub fn allocate<'a, I>(
    columns: I,
    container_width: u32,
    needs_scroll: bool,
    config: &LayoutConfig,
) -> Allocation<'a>
where
    I: IntoIterator<Item = &'a Column>,
{
    let mut columns: Vec<EffectiveColumn<'a>> =
        columns.into_iter().map(EffectiveColumn::declared).collect();

    if needs_scroll {
        debug!("layout: horizontal scroll active, keeping declared widths");
        return Allocation { columns };
    }
    if container_width == 0 {
        debug!("layout: container not measured yet, keeping declared widths");
        return Allocation { columns };
    }

    let Some(anchor) = columns.iter().position(|c| c.column.kind.is_document()) else {
        return Allocation { columns };
    };

    let mut fixed: u64 = 0;
    for (i, c) in columns.iter().enumerate() {
        if i == anchor {
            continue;
        }
        match c.width {
            Some(w) => fixed += u64::from(w),
            None => {
                debug!(
                    "layout: column '{}' has no pixel width, skipping anchor reflow",
                    c.column.key
                );
                return Allocation { columns };
            }
        }
    }

    let width = anchor_width(container_width, fixed, config);
    debug!(
        "layout: anchor '{}' sized to {}px (container {}px, fixed {}px)",
        columns[anchor].column.key, width, container_width, fixed
    );
    columns[anchor].width = Some(width);
    columns[anchor].anchor = true;
    Allocation { columns }
}

fn anchor_width(container_width: u32, fixed: u64, config: &LayoutConfig) -> u32 {
    let min = i64::from(config.min_anchor_width);
    let available = i64::from(container_width) - i64::from(config.margin) - fixed as i64;
    let remainder = available.max(min);
    let remainder = remainder as f64;
    let shrunk = (remainder - remainder * config.anchor_shrink.clamp(0.0, 1.0)).floor() as i64;
    shrunk.max(min).clamp(0, i64::from(u32::MAX)) as u32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::column::DocumentCell;
    use proptest::prelude::*;

    fn table(widths: &[u32], anchor_at: usize) -> Vec<Column> {
        let mut cols: Vec<Column> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| Column::new(format!("c{}", i), "").width(*w))
            .collect();
        let at = anchor_at.min(cols.len());
        cols.insert(at, Column::new("anchor", "").document(DocumentCell::default()));
        cols
    }

    proptest! {
        #[test]
        fn anchor_never_below_minimum(
            widths in prop::collection::vec(0u32..600, 0..8),
            anchor_at in 0usize..8,
            container in 1u32..4000,
            min in 0u32..400,
            shrink in 0.0f64..1.0,
        ) {
            let config = LayoutConfig {
                min_anchor_width: min,
                anchor_shrink: shrink,
                ..LayoutConfig::default()
            };
            let cols = table(&widths, anchor_at);
            let layout = allocate(&cols, container, false, &config);
            let anchor = layout.anchor_index().unwrap();
            prop_assert!(layout.width(anchor).unwrap() >= min);
        }

        #[test]
        fn total_fits_container_plus_margin(
            widths in prop::collection::vec(0u32..300, 0..6),
            anchor_at in 0usize..6,
            container in 1u32..4000,
        ) {
            let config = LayoutConfig::default();
            let cols = table(&widths, anchor_at);
            let fixed: u64 = widths.iter().map(|w| u64::from(*w)).sum();
            let fits = u64::from(container) >= fixed + u64::from(config.margin) + u64::from(config.min_anchor_width);
            prop_assume!(fits);

            let layout = allocate(&cols, container, false, &config);
            prop_assert!(layout.total() <= u64::from(container) + u64::from(config.margin));
        }

        #[test]
        fn needs_scroll_keeps_declared_widths(
            widths in prop::collection::vec(0u32..600, 0..8),
            anchor_at in 0usize..8,
            container in 0u32..4000,
        ) {
            let cols = table(&widths, anchor_at);
            let layout = allocate(&cols, container, true, &LayoutConfig::default());
            for (effective, column) in layout.columns.iter().zip(&cols) {
                prop_assert_eq!(effective.width, column.fixed_width());
                prop_assert!(!effective.anchor);
            }
        }
    }
}
