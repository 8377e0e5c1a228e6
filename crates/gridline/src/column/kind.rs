//! Cell kinds and their per-column configuration.

use serde::{Deserialize, Serialize};

use super::types::Align;
use crate::handler::{ActionHandler, DocumentHandler};

/// How the cells of a column are interpreted.
///
/// Kinds are a closed set; the renderer matches on them exhaustively. Data
/// that does not fit the kind still renders, as raw text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellKind {
    /// Scalar text, truncated to the column width.
    #[default]
    Plain,
    /// Status string mapped to a category with an indicator color.
    Status,
    /// Filename with a hover affordance.
    Document(DocumentCell),
    /// Action token rendered as a button.
    Action(ActionCell),
    /// Ordered list of parts.
    Composite(CompositeCell),
}

impl CellKind {
    /// Whether a pointer-down on cells of this kind belongs to the cell
    /// rather than to the table (no drag, no row click).
    pub fn is_interactive(&self) -> bool {
        match self {
            CellKind::Plain | CellKind::Status => false,
            CellKind::Document(_) | CellKind::Action(_) => true,
            CellKind::Composite(c) => c.clickable,
        }
    }

    /// Short name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Plain => "plain",
            CellKind::Status => "status",
            CellKind::Document(_) => "document",
            CellKind::Action(_) => "action",
            CellKind::Composite(_) => "composite",
        }
    }

    /// Returns `true` for document columns, the layout anchor candidates.
    pub fn is_document(&self) -> bool {
        matches!(self, CellKind::Document(_))
    }

    /// Returns `true` for action columns, which are never hidden.
    pub fn is_action(&self) -> bool {
        matches!(self, CellKind::Action(_))
    }
}

/// Icon revealed when hovering a document cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affordance {
    #[default]
    Download,
    Open,
    Configure,
}

impl Affordance {
    /// Icon name for the affordance.
    pub fn icon(self) -> &'static str {
        match self {
            Affordance::Download => "download",
            Affordance::Open => "external-link",
            Affordance::Configure => "settings",
        }
    }
}

/// Configuration of a document column.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DocumentCell {
    #[serde(default)]
    pub affordance: Affordance,
    #[serde(skip)]
    pub on_activate: Option<DocumentHandler>,
}

impl DocumentCell {
    pub fn new(affordance: Affordance) -> Self {
        DocumentCell {
            affordance,
            on_activate: None,
        }
    }

    /// Sets the callback invoked with `(filename, row)`.
    pub fn on_activate(mut self, handler: DocumentHandler) -> Self {
        self.on_activate = Some(handler);
        self
    }
}

/// Configuration of an action column.
///
/// `icon`, `label` and `color` override the preset of whatever action the
/// cell value names.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip)]
    pub on_click: Option<ActionHandler>,
}

impl ActionCell {
    pub fn new() -> Self {
        ActionCell::default()
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the callback invoked with `(action, display text, row)`.
    pub fn on_click(mut self, handler: ActionHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Returns `true` if any preset attribute is overridden.
    pub fn is_custom(&self) -> bool {
        self.icon.is_some() || self.label.is_some() || self.color.is_some()
    }
}

/// Main axis of a composite cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

fn default_gap() -> u16 {
    8
}

/// Layout of a composite column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeCell {
    #[serde(default)]
    pub direction: Direction,
    /// Space between parts, in pixels.
    #[serde(default = "default_gap")]
    pub gap: u16,
    #[serde(default)]
    pub align: Align,
    /// Whole-cell click target; suppresses drag and row clicks.
    #[serde(default)]
    pub clickable: bool,
}

impl Default for CompositeCell {
    fn default() -> Self {
        CompositeCell {
            direction: Direction::default(),
            gap: default_gap(),
            align: Align::default(),
            clickable: false,
        }
    }
}

impl CompositeCell {
    pub fn horizontal() -> Self {
        CompositeCell::default()
    }

    pub fn vertical() -> Self {
        CompositeCell {
            direction: Direction::Vertical,
            ..CompositeCell::default()
        }
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_kinds() {
        assert!(!CellKind::Plain.is_interactive());
        assert!(!CellKind::Status.is_interactive());
        assert!(CellKind::Document(DocumentCell::default()).is_interactive());
        assert!(CellKind::Action(ActionCell::new()).is_interactive());
        assert!(!CellKind::Composite(CompositeCell::horizontal()).is_interactive());
        assert!(CellKind::Composite(CompositeCell::horizontal().clickable()).is_interactive());
    }

    #[test]
    fn kind_deserializes_from_tag() {
        let kind: CellKind =
            serde_json::from_str(r#"{"kind": "document", "affordance": "configure"}"#).unwrap();
        match kind {
            CellKind::Document(doc) => {
                assert_eq!(doc.affordance, Affordance::Configure);
                assert!(doc.on_activate.is_none());
            }
            other => panic!("expected document, got {:?}", other),
        }

        let kind: CellKind = serde_json::from_str(r#"{"kind": "composite"}"#).unwrap();
        match kind {
            CellKind::Composite(c) => assert_eq!(c.gap, 8),
            other => panic!("expected composite, got {:?}", other),
        }
    }

    #[test]
    fn action_overrides() {
        let cell = ActionCell::new();
        assert!(!cell.is_custom());
        assert!(cell.label("Import").is_custom());
    }

    #[test]
    fn kind_yaml() {
        let kind: CellKind = serde_yaml::from_str("kind: action\nlabel: Run\n").unwrap();
        match kind {
            CellKind::Action(a) => assert_eq!(a.label.as_deref(), Some("Run")),
            other => panic!("expected action, got {:?}", other),
        }
    }
}
