//! Gridline Sort - stable ordering for table rows.
//!
//! This crate holds the comparison rules used by data tables whose cells hold
//! loosely typed text: amounts with currency symbols, counts, names, dates
//! rendered as strings. It knows nothing about rows or columns; callers supply
//! an accessor that turns an item and a column key into a [`SortKey`].
//!
//! - Keys compare numerically when both sides contain a number
//!   (`"$10"` > `"$5"`), otherwise as case-insensitive, accent-folded text.
//! - Sorting is stable in both directions.
//! - [`SortState`] models header clicks: asc → desc → asc on the same column,
//!   back to asc on a new one.
//!
//! # Quick Start
//!
//! ```rust
//! use gridline_sort::{SortKey, SortState};
//!
//! struct Invoice {
//!     client: String,
//!     amount: String,
//! }
//!
//! fn accessor(invoice: &Invoice, column: &str) -> SortKey {
//!     match column {
//!         "client" => SortKey::new(&invoice.client),
//!         "amount" => SortKey::new(&invoice.amount),
//!         _ => SortKey::empty(),
//!     }
//! }
//!
//! let invoices = vec![
//!     Invoice { client: "Borealis".into(), amount: "$1,200".into() },
//!     Invoice { client: "Acme".into(), amount: "$950".into() },
//! ];
//!
//! let mut state = SortState::none();
//! state.toggle("amount");
//!
//! let order = gridline_sort::sort_indices(&invoices, &state, accessor);
//! assert_eq!(order, vec![1, 0]);
//! ```

mod error;
mod key;
mod ordering;
mod sort;

pub use error::{Result, SortError};
pub use key::{parse_number, SortKey};
pub use ordering::{compare_keys, SortDirection, SortState};
pub use sort::{apply_order, sort_indices, sorted};
