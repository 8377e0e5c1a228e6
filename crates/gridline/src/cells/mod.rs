//! Cell rendering: one strategy per [`CellKind`].
//!
//! [`render_cell`] turns a raw [`CellValue`] into a [`CellContent`] the view
//! layer can draw. Values whose shape does not fit the column's kind render as
//! [`CellContent::Raw`] instead of failing.
//!
//! [`activate_cell`] handles a click on a document or action cell: it invokes
//! the column's callback and reports what was requested. The engine never
//! performs the download or action itself.

mod action;
mod composite;
mod status;

pub use action::{ActionKind, ActionPreset, UnknownAction};
pub use composite::{CompositeContent, RenderedPart};
pub use status::StatusCategory;

use log::trace;
use serde::Serialize;

use crate::column::{ActionCell, Affordance, Align, CellKind, Column};
use crate::config::LayoutConfig;
use crate::row::{CellValue, Row};
use crate::util::{cells_for_pixels, truncate_end};

/// A rendered cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellContent {
    Text(TextCell),
    Status(StatusCell),
    Document(DocumentContent),
    Action(ActionButton),
    Composite(CompositeContent),
    /// Value rendered as-is because it did not fit the column's kind.
    Raw { text: String, value: CellValue },
}

/// Plain text, possibly truncated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextCell {
    /// Text to display.
    pub text: String,
    /// Full value, present only when `text` was truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub align: Align,
}

impl TextCell {
    pub fn is_truncated(&self) -> bool {
        self.tooltip.is_some()
    }
}

/// Status indicator with its original label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusCell {
    pub category: StatusCategory,
    pub color: &'static str,
    pub label: String,
}

/// Filename with a hover affordance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentContent {
    pub filename: String,
    pub affordance: Affordance,
    pub icon: &'static str,
}

/// Action button after applying column overrides to the preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionButton {
    pub action: ActionKind,
    pub label: String,
    pub icon: String,
    pub color: String,
    /// `true` when the column overrides any preset attribute.
    pub custom: bool,
}

impl ActionButton {
    fn resolve(action: ActionKind, cell: &ActionCell) -> Self {
        let preset = action.preset();
        ActionButton {
            action,
            label: cell.label.clone().unwrap_or_else(|| preset.label.to_string()),
            icon: cell.icon.clone().unwrap_or_else(|| preset.icon.to_string()),
            color: cell.color.clone().unwrap_or_else(|| preset.color.to_string()),
            custom: cell.is_custom(),
        }
    }
}

impl CellContent {
    /// Text a reader would see in the cell, untruncated.
    pub fn plain_text(&self) -> String {
        match self {
            CellContent::Text(cell) => cell.tooltip.clone().unwrap_or_else(|| cell.text.clone()),
            CellContent::Status(cell) => cell.label.clone(),
            CellContent::Document(doc) => doc.filename.clone(),
            CellContent::Action(button) => button.label.clone(),
            CellContent::Composite(content) => content.text(),
            CellContent::Raw { text, .. } => text.clone(),
        }
    }

    /// Returns `true` for content rendered through the fallback path.
    pub fn is_raw(&self) -> bool {
        matches!(self, CellContent::Raw { .. })
    }
}

fn raw(value: &CellValue) -> CellContent {
    CellContent::Raw {
        text: value.text_content().into_owned(),
        value: value.clone(),
    }
}

/// Renders one cell of `column`.
///
/// `width` is the resolved pixel width of the column, used to truncate plain
/// text. Without a width, text is never truncated.
///
/// # Example
///
/// ```
/// use gridline::{render_cell, ActionCell, ActionKind, CellContent, CellValue, Column, LayoutConfig};
///
/// let column = Column::new("next", "Next step").action(ActionCell::new());
/// let content = render_cell(&column, &CellValue::from("upload"), None, &LayoutConfig::default());
///
/// match content {
///     CellContent::Action(button) => {
///         assert_eq!(button.action, ActionKind::Upload);
///         assert_eq!(button.label, "Upload");
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn render_cell(
    column: &Column,
    value: &CellValue,
    width: Option<u32>,
    layout: &LayoutConfig,
) -> CellContent {
    match &column.kind {
        CellKind::Plain => render_plain(column, value, width, layout),
        CellKind::Status => match value {
            CellValue::Text(label) => {
                let category = StatusCategory::classify(label);
                CellContent::Status(StatusCell {
                    category,
                    color: category.color(),
                    label: label.clone(),
                })
            }
            _ => raw(value),
        },
        CellKind::Document(doc) => match value {
            CellValue::Text(filename) if !filename.is_empty() => {
                CellContent::Document(DocumentContent {
                    filename: filename.clone(),
                    affordance: doc.affordance,
                    icon: doc.affordance.icon(),
                })
            }
            _ => raw(value),
        },
        CellKind::Action(cell) => match value {
            CellValue::Text(token) => {
                CellContent::Action(ActionButton::resolve(ActionKind::parse_or_default(token), cell))
            }
            CellValue::Empty if cell.is_custom() => {
                CellContent::Action(ActionButton::resolve(ActionKind::default(), cell))
            }
            _ => raw(value),
        },
        CellKind::Composite(layout) => match value {
            CellValue::Parts(parts) => {
                CellContent::Composite(CompositeContent::build(parts, layout))
            }
            _ => raw(value),
        },
    }
}

fn render_plain(
    column: &Column,
    value: &CellValue,
    width: Option<u32>,
    layout: &LayoutConfig,
) -> CellContent {
    if value.as_parts().is_some() {
        return raw(value);
    }
    let full = value.text_content();
    let budget = width.map(|px| cells_for_pixels(px, layout.glyph_width, layout.cell_padding));
    let text = match budget {
        Some(max) => truncate_end(&full, max),
        None => full.to_string(),
    };
    let tooltip = (text != full).then(|| full.into_owned());
    CellContent::Text(TextCell {
        text,
        tooltip,
        align: column.align,
    })
}

/// What an activated cell asked for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellActivation {
    /// A document was requested.
    Document { filename: String },
    /// An action button was clicked.
    Action { action: ActionKind, label: String },
}

/// Activates a document or action cell.
///
/// Invokes the column's callback, if any, and returns what was requested.
/// Returns `None` for non-interactive kinds and for values that rendered as
/// raw content.
pub fn activate_cell(column: &Column, value: &CellValue, row: &Row) -> Option<CellActivation> {
    match &column.kind {
        CellKind::Document(doc) => {
            let filename = match value {
                CellValue::Text(f) if !f.is_empty() => f,
                _ => return None,
            };
            trace!("cells: document '{}' activated in '{}'", filename, column.key);
            if let Some(handler) = &doc.on_activate {
                handler.call(filename, row);
            }
            Some(CellActivation::Document {
                filename: filename.clone(),
            })
        }
        CellKind::Action(cell) => {
            let button = match value {
                CellValue::Text(token) => {
                    ActionButton::resolve(ActionKind::parse_or_default(token), cell)
                }
                CellValue::Empty if cell.is_custom() => {
                    ActionButton::resolve(ActionKind::default(), cell)
                }
                _ => return None,
            };
            trace!("cells: action '{}' clicked in '{}'", button.action, column.key);
            if let Some(handler) = &cell.on_click {
                handler.call(button.action, &button.label, row);
            }
            Some(CellActivation::Action {
                action: button.action,
                label: button.label,
            })
        }
        CellKind::Plain | CellKind::Status | CellKind::Composite(_) => None,
    }
}
