//! Property-based tests for the sort engine using proptest.

use gridline_sort::{parse_number, sort_indices, sorted, SortKey, SortState};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn text_accessor(s: &String, _column: &str) -> SortKey {
    SortKey::new(s)
}

// Amounts rendered the way a finance table would show them.
fn amount_strategy() -> impl Strategy<Value = String> {
    (-100_000i64..100_000, prop::sample::select(vec!["$", "", "€ "]))
        .prop_map(|(cents, prefix)| {
            let sign = if cents < 0 { "-" } else { "" };
            let abs = cents.unsigned_abs();
            format!("{}{}{}.{:02}", sign, prefix, abs / 100, abs % 100)
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Without an active column the order is untouched.
    #[test]
    fn no_sort_is_identity(items in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..50)) {
        let order = sort_indices(&items, &SortState::none(), text_accessor);
        let identity: Vec<usize> = (0..items.len()).collect();
        prop_assert_eq!(order, identity);
    }

    /// Ascending numeric-looking values come out non-decreasing.
    #[test]
    fn ascending_numbers_are_non_decreasing(items in prop::collection::vec(amount_strategy(), 0..60)) {
        let out = sorted(&items, &SortState::asc("amount"), text_accessor);
        let numbers: Vec<f64> = out.iter().filter_map(|s| parse_number(s)).collect();
        prop_assert_eq!(numbers.len(), out.len());
        for pair in numbers.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    /// Descending numeric-looking values come out non-increasing.
    #[test]
    fn descending_numbers_are_non_increasing(items in prop::collection::vec(amount_strategy(), 0..60)) {
        let out = sorted(&items, &SortState::desc("amount"), text_accessor);
        let numbers: Vec<f64> = out.iter().filter_map(|s| parse_number(s)).collect();
        for pair in numbers.windows(2) {
            prop_assert!(pair[0] >= pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    /// Sorting an already sorted list changes nothing.
    #[test]
    fn sorting_text_is_idempotent(items in prop::collection::vec("[a-zA-Z ]{0,8}", 0..50)) {
        let state = SortState::asc("c");
        let once = sorted(&items, &state, text_accessor);
        let twice = sorted(&once, &state, text_accessor);
        prop_assert_eq!(once, twice);
    }

    /// Same for purely numeric columns, in either direction.
    #[test]
    fn sorting_numbers_is_idempotent(items in prop::collection::vec(amount_strategy(), 0..50), desc in any::<bool>()) {
        let state = if desc { SortState::desc("n") } else { SortState::asc("n") };
        let once = sorted(&items, &state, text_accessor);
        let twice = sorted(&once, &state, text_accessor);
        prop_assert_eq!(once, twice);
    }

    /// Arbitrary mixed data never panics and always yields a permutation.
    #[test]
    fn mixed_data_is_a_permutation(items in prop::collection::vec("[a-z0-9$.,-]{0,10}", 0..80), desc in any::<bool>()) {
        let state = if desc { SortState::desc("c") } else { SortState::asc("c") };
        let mut order = sort_indices(&items, &state, text_accessor);
        order.sort_unstable();
        let identity: Vec<usize> = (0..items.len()).collect();
        prop_assert_eq!(order, identity);
    }

    /// For distinct keys, descending is exactly reversed ascending.
    #[test]
    fn opposite_directions_reverse(items in prop::collection::hash_set(0u32..1_000_000, 0..50)) {
        let items: Vec<String> = items.into_iter().map(|n| format!("#{}", n)).collect();
        let asc = sorted(&items, &SortState::asc("id"), text_accessor);
        let mut desc = sorted(&items, &SortState::desc("id"), text_accessor);
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    /// Empty values sort ahead of everything in ascending order.
    #[test]
    fn empty_values_lead(mut items in prop::collection::vec("[a-z]{1,6}", 1..30), pos in 0usize..30) {
        let pos = pos.min(items.len());
        items.insert(pos, String::new());
        let out = sorted(&items, &SortState::asc("c"), text_accessor);
        prop_assert_eq!(out[0].as_str(), "");
    }
}
