//! Core column types: alignment, width hints and the column descriptor.

use serde::{Deserialize, Serialize};

use super::kind::{ActionCell, CellKind, CompositeCell, DocumentCell};

/// Text alignment within a cell or header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Declared width of a column.
///
/// Only pixel widths take part in width allocation. Anything else
/// (percentages, `auto`, CSS expressions) is kept verbatim for the host and
/// counts as "no fixed width".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum WidthHint {
    /// Fixed width in pixels.
    Pixels(u32),
    /// Any other width expression.
    Other(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Number(f64),
    Text(String),
}

impl From<WidthHint> for WidthRaw {
    fn from(width: WidthHint) -> Self {
        match width {
            WidthHint::Pixels(px) => WidthRaw::Number(f64::from(px)),
            WidthHint::Other(s) => WidthRaw::Text(s),
        }
    }
}

impl TryFrom<WidthRaw> for WidthHint {
    type Error = String;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Number(n) if n.is_finite() && n >= 0.0 => Ok(WidthHint::Pixels(n as u32)),
            WidthRaw::Number(n) => Err(format!("invalid column width: {}", n)),
            WidthRaw::Text(s) => Ok(WidthHint::parse(&s)),
        }
    }
}

impl WidthHint {
    /// Parses a width expression.
    ///
    /// `"120"`, `"120px"` and `"120.5px"` are pixel widths; everything else
    /// is kept as [`WidthHint::Other`].
    ///
    /// ```
    /// use gridline::WidthHint;
    ///
    /// assert_eq!(WidthHint::parse("140px"), WidthHint::Pixels(140));
    /// assert_eq!(WidthHint::parse(" 96 "), WidthHint::Pixels(96));
    /// assert_eq!(WidthHint::parse("20%"), WidthHint::Other("20%".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        match number.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => WidthHint::Pixels(n as u32),
            _ => WidthHint::Other(s.to_string()),
        }
    }

    /// The pixel width, if this hint has one.
    pub fn pixels(&self) -> Option<u32> {
        match self {
            WidthHint::Pixels(px) => Some(*px),
            WidthHint::Other(_) => None,
        }
    }
}

impl From<u32> for WidthHint {
    fn from(px: u32) -> Self {
        WidthHint::Pixels(px)
    }
}

impl From<&str> for WidthHint {
    fn from(s: &str) -> Self {
        WidthHint::parse(s)
    }
}

/// A table column definition.
///
/// `key` identifies the row field the column reads and must be unique within
/// a table. Columns are displayed in list order.
///
/// # Example
///
/// ```
/// use gridline::{Align, Column};
///
/// let amount = Column::new("amount", "Amount")
///     .sortable()
///     .width(120)
///     .align(Align::Right);
///
/// assert_eq!(amount.header_alignment(), Align::Right);
/// assert_eq!(amount.fixed_width(), Some(120));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    /// Row field this column displays.
    pub key: String,
    /// Header label.
    #[serde(default)]
    pub title: String,
    /// Whether clicking the header sorts by this column.
    #[serde(default)]
    pub sortable: bool,
    /// Declared width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthHint>,
    /// Body cell alignment.
    #[serde(default)]
    pub align: Align,
    /// Header alignment; falls back to `align`.
    #[serde(default, alias = "headerAlign", skip_serializing_if = "Option::is_none")]
    pub header_align: Option<Align>,
    /// How cells of this column are interpreted.
    #[serde(default, rename = "cell", alias = "cellKind")]
    pub kind: CellKind,
    /// Keep this column pinned while the body scrolls horizontally.
    #[serde(default)]
    pub frozen: bool,
    /// Whether the column starts in the visible set.
    #[serde(default = "default_visible", alias = "visibleByDefault")]
    pub visible_by_default: bool,
}

fn default_visible() -> bool {
    true
}

impl Column {
    /// Creates a plain, unsortable column.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            align: Align::default(),
            header_align: None,
            kind: CellKind::default(),
            frozen: false,
            visible_by_default: true,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the declared width (`120`, `"120px"`, `"20%"`).
    pub fn width(mut self, width: impl Into<WidthHint>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the body alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Shorthand for `.align(Align::Center)`.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Sets the header alignment independently of the body.
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = Some(align);
        self
    }

    /// Sets the cell kind.
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Interprets cells as status strings.
    pub fn status(self) -> Self {
        self.kind(CellKind::Status)
    }

    /// Interprets cells as document filenames.
    pub fn document(self, cell: DocumentCell) -> Self {
        self.kind(CellKind::Document(cell))
    }

    /// Interprets cells as action tokens.
    pub fn action(self, cell: ActionCell) -> Self {
        self.kind(CellKind::Action(cell))
    }

    /// Interprets cells as composite part lists.
    pub fn composite(self, cell: CompositeCell) -> Self {
        self.kind(CellKind::Composite(cell))
    }

    /// Pins the column while scrolling horizontally.
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Leaves the column out of the initial visible set.
    pub fn hidden(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    /// Effective header alignment.
    pub fn header_alignment(&self) -> Align {
        self.header_align.unwrap_or(self.align)
    }

    /// Declared pixel width, if any.
    pub fn fixed_width(&self) -> Option<u32> {
        self.width.as_ref().and_then(WidthHint::pixels)
    }
}
