//! Composite cells: ordered part lists laid out along one axis.

use serde::Serialize;

use super::action::ActionKind;
use super::status::StatusCategory;
use crate::column::{Align, CompositeCell, Direction};
use crate::row::Part;

/// A resolved composite part, ready for the view layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "part", rename_all = "kebab-case")]
pub enum RenderedPart {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    Icon {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    Button {
        label: String,
        /// Parsed action; buttons without a token have none.
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<ActionKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    Badge {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    StatusDot {
        category: StatusCategory,
        color: &'static str,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
}

impl RenderedPart {
    /// Resolves a raw part.
    pub fn from_part(part: &Part) -> Self {
        match part {
            Part::Text { text, style } => RenderedPart::Text {
                text: text.clone(),
                style: style.clone(),
            },
            Part::Icon { name, style } => RenderedPart::Icon {
                name: name.clone(),
                style: style.clone(),
            },
            Part::Button {
                label,
                action,
                style,
            } => RenderedPart::Button {
                label: label.clone(),
                action: action.as_deref().map(ActionKind::parse_or_default),
                style: style.clone(),
            },
            Part::Badge { text, style } => RenderedPart::Badge {
                text: text.clone(),
                style: style.clone(),
            },
            Part::StatusDot { status, style } => {
                let category = StatusCategory::classify(status);
                RenderedPart::StatusDot {
                    category,
                    color: category.color(),
                    label: status.clone(),
                    style: style.clone(),
                }
            }
        }
    }

    /// Visible text of the part; icons have none.
    pub fn text(&self) -> &str {
        match self {
            RenderedPart::Text { text, .. } | RenderedPart::Badge { text, .. } => text,
            RenderedPart::Button { label, .. } | RenderedPart::StatusDot { label, .. } => label,
            RenderedPart::Icon { .. } => "",
        }
    }
}

/// Rendered composite cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompositeContent {
    pub parts: Vec<RenderedPart>,
    pub direction: Direction,
    pub gap: u16,
    pub align: Align,
    pub clickable: bool,
}

impl CompositeContent {
    pub(crate) fn build(parts: &[Part], layout: &CompositeCell) -> Self {
        CompositeContent {
            parts: parts.iter().map(RenderedPart::from_part).collect(),
            direction: layout.direction,
            gap: layout.gap,
            align: layout.align,
            clickable: layout.clickable,
        }
    }

    /// Text of all parts joined with single spaces.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(RenderedPart::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns `true` if any part handles its own clicks.
    pub fn has_buttons(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, RenderedPart::Button { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_keep_order_and_resolve() {
        let parts = vec![
            Part::icon("file"),
            Part::label("Q1 report"),
            Part::badge("new"),
            Part::status_dot("Failed"),
            Part::button("Get", "DOWNLOAD"),
        ];
        let content = CompositeContent::build(&parts, &CompositeCell::vertical().gap(4));
        assert_eq!(content.parts.len(), 5);
        assert_eq!(content.direction, Direction::Vertical);
        assert_eq!(content.gap, 4);
        assert!(matches!(
            content.parts[3],
            RenderedPart::StatusDot {
                category: StatusCategory::Error,
                ..
            }
        ));
        assert!(matches!(
            content.parts[4],
            RenderedPart::Button {
                action: Some(ActionKind::Download),
                ..
            }
        ));
        assert!(content.has_buttons());
        assert_eq!(content.text(), "Q1 report new Failed Get");
    }

    #[test]
    fn styles_pass_through() {
        let part = Part::Badge {
            text: "beta".into(),
            style: Some("muted".into()),
        };
        match RenderedPart::from_part(&part) {
            RenderedPart::Badge { style, .. } => assert_eq!(style.as_deref(), Some("muted")),
            other => panic!("unexpected part {:?}", other),
        }
    }
}
