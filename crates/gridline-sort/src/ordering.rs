//! Sort direction, sort state, and the key comparator.
//!
//! Provides [`SortDirection`], the header-click state machine [`SortState`],
//! and [`compare_keys`], the mixed numeric/text comparison used by the engine.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::key::SortKey;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortDirection {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(SortError::InvalidDirection(s.to_string())),
        }
    }
}

/// The active sort of a table: which column, which way.
///
/// A fresh state sorts nothing. [`SortState::toggle`] implements header-click
/// behavior: the same column flips between ascending and descending, a new
/// column starts ascending.
///
/// ```
/// use gridline_sort::{SortDirection, SortState};
///
/// let mut state = SortState::none();
/// state.toggle("amount");
/// assert_eq!(state.direction(), Some(SortDirection::Asc));
/// state.toggle("amount");
/// assert_eq!(state.direction(), Some(SortDirection::Desc));
/// state.toggle("name");
/// assert_eq!(state.column(), Some("name"));
/// assert_eq!(state.direction(), Some(SortDirection::Asc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    column: Option<String>,
    #[serde(default)]
    direction: Option<SortDirection>,
}

impl SortState {
    /// A state with no active sort.
    pub fn none() -> Self {
        SortState::default()
    }

    /// A state sorting `column` in `direction`.
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        SortState {
            column: Some(column.into()),
            direction: Some(direction),
        }
    }

    /// Shorthand for an ascending sort on `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        SortState::by(column, SortDirection::Asc)
    }

    /// Shorthand for a descending sort on `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        SortState::by(column, SortDirection::Desc)
    }

    /// The sorted column key, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// The raw direction, if any.
    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Direction used when sorting. A column without a direction sorts ascending.
    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }

    /// Returns `true` when no column is selected.
    pub fn is_none(&self) -> bool {
        self.column.is_none()
    }

    /// Direction shown for `column`: `Some` only when it is the sorted one.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match &self.column {
            Some(active) if active == column => Some(self.effective_direction()),
            _ => None,
        }
    }

    /// Advances the state as if the header of `column` was clicked.
    ///
    /// Returns the new direction.
    pub fn toggle(&mut self, column: &str) -> SortDirection {
        let next = match (&self.column, self.direction) {
            (Some(active), Some(dir)) if active == column => dir.flipped(),
            _ => SortDirection::Asc,
        };
        self.column = Some(column.to_string());
        self.direction = Some(next);
        next
    }

    /// Clears the active sort.
    pub fn clear(&mut self) {
        self.column = None;
        self.direction = None;
    }
}

/// Compares two sort keys in ascending order.
///
/// When both keys carry a number, the numbers decide. Otherwise the
/// transliterated text decides, with the lowercased text breaking ties so that
/// distinct values never compare equal just because they fold the same way.
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a.number(), b.number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a
            .folded()
            .cmp(b.folded())
            .then_with(|| a.text().cmp(b.text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Asc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn direction_display_and_parse() {
        assert_eq!(SortDirection::Asc.to_string(), "asc");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(" ascending ".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!(
            "sideways".parse::<SortDirection>(),
            Err(SortError::InvalidDirection("sideways".to_string()))
        );
    }

    #[test]
    fn toggle_cycles_same_column() {
        let mut state = SortState::none();
        assert_eq!(state.toggle("a"), SortDirection::Asc);
        assert_eq!(state.toggle("a"), SortDirection::Desc);
        assert_eq!(state.toggle("a"), SortDirection::Asc);
    }

    #[test]
    fn toggle_resets_on_new_column() {
        let mut state = SortState::desc("a");
        assert_eq!(state.toggle("b"), SortDirection::Asc);
        assert_eq!(state.column(), Some("b"));
    }

    #[test]
    fn toggle_without_direction_starts_ascending() {
        let mut state = SortState {
            column: Some("a".into()),
            direction: None,
        };
        assert_eq!(state.toggle("a"), SortDirection::Asc);
    }

    #[test]
    fn direction_for_only_reports_active_column() {
        let state = SortState::desc("amount");
        assert_eq!(state.direction_for("amount"), Some(SortDirection::Desc));
        assert_eq!(state.direction_for("name"), None);
        assert_eq!(SortState::none().direction_for("amount"), None);
    }

    #[test]
    fn numbers_beat_text() {
        let ten = SortKey::new("$10");
        let five = SortKey::new("$5");
        assert_eq!(compare_keys(&five, &ten), Ordering::Less);
    }

    #[test]
    fn mixed_falls_back_to_text() {
        let a = SortKey::new("10");
        let b = SortKey::new("apple");
        // "10" < "apple" as text
        assert_eq!(compare_keys(&a, &b), Ordering::Less);
    }

    #[test]
    fn empty_sorts_first() {
        assert_eq!(
            compare_keys(&SortKey::empty(), &SortKey::new("a")),
            Ordering::Less
        );
    }

    #[test]
    fn accents_collate_with_base_letters() {
        let e = SortKey::new("Émile");
        let f = SortKey::new("Fabien");
        assert_eq!(compare_keys(&e, &f), Ordering::Less);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(
            compare_keys(&SortKey::new("ALPHA"), &SortKey::new("alpha")),
            Ordering::Equal
        );
    }
}
