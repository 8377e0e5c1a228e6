//! Row data: raw cell values and grouping flags.
//!
//! A [`Row`] is an open map from column key to [`CellValue`]. Rows are
//! positional: the engine refers to them by their index in the list the
//! caller supplied (the *source index*), never by identity.
//!
//! Grouping is expressed with flags rather than nesting. A row with
//! `is_group = true` is a group header and owns the `is_group_child` rows that
//! immediately follow it, up to the next header or the end of the data.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw cell value as supplied by the embedding application.
///
/// Deserializes from plain JSON/YAML: `null`, booleans, numbers and strings
/// map to the scalar variants, arrays to composite [`Part`] lists, and
/// objects to a pre-rendered [`Fragment`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value.
    #[default]
    Empty,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Ordered sub-elements for composite cells.
    Parts(Vec<Part>),
    /// Content the host already rendered.
    Fragment(Fragment),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The string, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The part list, if this is a composite value.
    pub fn as_parts(&self) -> Option<&[Part]> {
        match self {
            CellValue::Parts(parts) => Some(parts),
            _ => None,
        }
    }

    /// Plain text of the value, as a browser's `textContent` would give it.
    ///
    /// Fragments contribute their text, part lists the concatenation of the
    /// text of each part.
    pub fn text_content(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Parts(parts) => Cow::Owned(parts.iter().map(Part::text).collect()),
            CellValue::Fragment(fragment) => Cow::Borrowed(&fragment.text),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<Vec<Part>> for CellValue {
    fn from(parts: Vec<Part>) -> Self {
        CellValue::Parts(parts)
    }
}

impl From<Fragment> for CellValue {
    fn from(fragment: Fragment) -> Self {
        CellValue::Fragment(fragment)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Pre-rendered content supplied by the host.
///
/// The engine treats the payload as opaque and only reads `text`, which is
/// used for sorting and CSV export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Textual content of the fragment.
    pub text: String,
    /// Host-specific data (markup, component props).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Fragment {
    /// Creates a fragment with the given text content.
    pub fn new(text: impl Into<String>) -> Self {
        Fragment {
            text: text.into(),
            payload: None,
        }
    }

    /// Attaches a host payload.
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// One sub-element of a composite cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Part {
    /// A run of text.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// An icon reference.
    Icon {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// A nested button. `action` is an action token such as `"download"`.
    Button {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// A small pill of text.
    Badge {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// A colored dot driven by a status string.
    StatusDot {
        status: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
}

impl Part {
    /// Text part.
    pub fn text(&self) -> &str {
        match self {
            Part::Text { text, .. } | Part::Badge { text, .. } => text,
            Part::Button { label, .. } => label,
            Part::StatusDot { status, .. } => status,
            Part::Icon { .. } => "",
        }
    }

    /// Shorthand for an unstyled text part.
    pub fn label(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            style: None,
        }
    }

    /// Shorthand for an unstyled icon part.
    pub fn icon(name: impl Into<String>) -> Self {
        Part::Icon {
            name: name.into(),
            style: None,
        }
    }

    /// Shorthand for a button part bound to an action token.
    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Part::Button {
            label: label.into(),
            action: Some(action.into()),
            style: None,
        }
    }

    /// Shorthand for an unstyled badge part.
    pub fn badge(text: impl Into<String>) -> Self {
        Part::Badge {
            text: text.into(),
            style: None,
        }
    }

    /// Shorthand for an unstyled status dot.
    pub fn status_dot(status: impl Into<String>) -> Self {
        Part::StatusDot {
            status: status.into(),
            style: None,
        }
    }

    /// Returns `true` for parts that handle their own clicks.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Part::Button { .. })
    }
}

/// A table row.
///
/// # Example
///
/// ```
/// use gridline::{CellValue, Row};
///
/// let header = Row::group("Q1 filings");
/// let row = Row::new()
///     .cell("name", "report.pdf")
///     .cell("amount", 1250)
///     .child();
///
/// assert!(header.is_group);
/// assert!(row.is_group_child);
/// assert_eq!(row.get("amount"), Some(&CellValue::Number(1250.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values keyed by column key.
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,
    /// This row is a collapsible group header.
    #[serde(default, alias = "isGroup", skip_serializing_if = "is_false")]
    pub is_group: bool,
    /// Label of the group header.
    #[serde(default, alias = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// This row belongs to the preceding group header (indented).
    #[serde(default, alias = "isGroupChild", skip_serializing_if = "is_false")]
    pub is_group_child: bool,
    /// For group headers: whether children are shown. Missing means expanded.
    #[serde(default, alias = "isExpanded", skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Row {
    /// Creates an empty data row.
    pub fn new() -> Self {
        Row::default()
    }

    /// Creates a group header row.
    pub fn group(name: impl Into<String>) -> Self {
        Row {
            is_group: true,
            group_name: Some(name.into()),
            ..Row::default()
        }
    }

    /// Sets a cell value.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Marks the row as a child of the preceding group header.
    pub fn child(mut self) -> Self {
        self.is_group_child = true;
        self
    }

    /// Sets the initial expanded state of a group header.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.is_expanded = Some(expanded);
        self
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// Sets a cell value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    /// Header label for group rows; empty for data rows.
    pub fn group_label(&self) -> &str {
        self.group_name.as_deref().unwrap_or("")
    }

    /// Whether a group header shows its children, ignoring overrides.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded != Some(false)
    }
}
