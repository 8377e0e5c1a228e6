//! The stable sort engine.
//!
//! Sorting works on an index permutation so callers keep ownership of their
//! rows: keys are extracted once per item through an accessor function, the
//! permutation is stably sorted, and the caller decides how to apply it.

use std::cmp::Ordering;

use crate::key::SortKey;
use crate::ordering::{compare_keys, SortState};

/// Computes the display order of `items` under `state`.
///
/// Returns the identity permutation when `state` has no column. Items whose
/// keys compare equal keep their original relative order, in both
/// directions.
///
/// # Example
///
/// ```
/// use gridline_sort::{sort_indices, SortKey, SortState};
///
/// let amounts = vec!["$10", "$5", "$7.50"];
/// let order = sort_indices(&amounts, &SortState::asc("amount"), |s, _| SortKey::new(s));
/// assert_eq!(order, vec![1, 2, 0]);
/// ```
pub fn sort_indices<T, F>(items: &[T], state: &SortState, accessor: F) -> Vec<usize>
where
    F: Fn(&T, &str) -> SortKey,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    let Some(column) = state.column() else {
        return order;
    };

    let keys: Vec<SortKey> = items.iter().map(|item| accessor(item, column)).collect();
    let direction = state.effective_direction();

    merge_sort_by(&mut order, |&a, &b| {
        direction.apply(compare_keys(&keys[a], &keys[b]))
    });
    order
}

/// Stable merge sort that tolerates comparators without a total order.
///
/// Mixed numeric/text columns do not form a total order, and
/// `slice::sort_by` may panic on such comparators. This always returns a
/// permutation of its input.
fn merge_sort_by<T, F>(items: &mut Vec<T>, mut cmp: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buf = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                // Take from the right run only when strictly smaller.
                if cmp(&items[j], &items[i]) == Ordering::Less {
                    buf[k] = items[j];
                    j += 1;
                } else {
                    buf[k] = items[i];
                    i += 1;
                }
                k += 1;
            }
            buf[k..k + (mid - i)].copy_from_slice(&items[i..mid]);
            k += mid - i;
            buf[k..k + (end - j)].copy_from_slice(&items[j..end]);
            start = end;
        }
        std::mem::swap(items, &mut buf);
        width *= 2;
    }
}

/// Returns clones of `items` arranged in `order`.
///
/// Indices that are out of range are skipped.
pub fn apply_order<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().filter_map(|&i| items.get(i).cloned()).collect()
}

/// Convenience wrapper: sorts a copy of `items` under `state`.
pub fn sorted<T, F>(items: &[T], state: &SortState, accessor: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &str) -> SortKey,
{
    let order = sort_indices(items, state, accessor);
    apply_order(items, &order)
}
