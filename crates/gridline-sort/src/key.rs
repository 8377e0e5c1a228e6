//! Sort keys extracted from cell text.
//!
//! A [`SortKey`] captures everything the comparator needs from one cell: the
//! lowercased text, an accent-folded form used for collation, and the number
//! the text parses to (if any). Keys are computed once per row before sorting.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("valid regex"));

/// Pre-computed comparison key for a single cell.
///
/// # Example
///
/// ```
/// use gridline_sort::SortKey;
///
/// let key = SortKey::new("$1,250.50");
/// assert_eq!(key.number(), Some(1250.5));
/// assert_eq!(key.text(), "$1,250.50");
///
/// let key = SortKey::new("Report");
/// assert_eq!(key.number(), None);
/// assert_eq!(key.text(), "report");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortKey {
    text: String,
    folded: String,
    number: Option<f64>,
}

impl SortKey {
    /// Builds a key from raw cell text.
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let number = parse_number(&text);
        let folded = deunicode(&text);
        SortKey {
            text,
            folded,
            number,
        }
    }

    /// Key for a missing or empty value. Sorts before any non-empty text.
    pub fn empty() -> Self {
        SortKey::default()
    }

    /// The lowercased source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Transliterated form of the text used for collation.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// The numeric interpretation of the text, if it has one.
    pub fn number(&self) -> Option<f64> {
        self.number
    }

    /// Returns `true` when the source text was empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        SortKey::new(raw)
    }
}

/// Parses the numeric content of a cell.
///
/// Every character other than digits, `.` and `-` is discarded first, so
/// `"$1,200"` and `"1200 kg"` both read as `1200`. The longest leading number
/// of what remains is used (`"1.2.3"` reads as `1.2`, `"10-12"` as `10`).
/// Returns `None` when no digit survives in that leading position.
pub fn parse_number(raw: &str) -> Option<f64> {
    let stripped = NON_NUMERIC.replace_all(raw, "");
    leading_number(&stripped)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut negative = false;

    if bytes.first() == Some(&b'-') {
        negative = true;
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = &s[int_start..end];

    let mut frac_digits = "";
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let normalized = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    normalized.parse::<f64>().ok()
}
