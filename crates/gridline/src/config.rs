//! Table configuration and declarative table definitions.
//!
//! [`TableConfig`] carries the tunable constants of width allocation,
//! truncation and drag scrolling. [`TableSpec`] bundles a column list with a
//! config so a whole table can be described in YAML or JSON:
//!
//! ```yaml
//! columns:
//!   - key: name
//!     title: Document
//!     cell: { kind: document, affordance: open }
//!   - key: amount
//!     title: Amount
//!     sortable: true
//!     width: 120px
//!     align: right
//! config:
//!   layout:
//!     margin: 32
//! ```

use serde::{Deserialize, Serialize};

use crate::column::{validate_columns, Column};
use crate::error::Result;

/// Width allocation and truncation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels reserved for borders and padding around the table.
    pub margin: u32,
    /// Smallest width the anchor column is ever given.
    pub min_anchor_width: u32,
    /// Fraction of the remainder withheld from the anchor column.
    pub anchor_shrink: f64,
    /// Average glyph width used to turn pixel widths into character budgets.
    pub glyph_width: f32,
    /// Horizontal padding inside a cell, in pixels.
    pub cell_padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            margin: 48,
            min_anchor_width: 160,
            anchor_shrink: 0.30,
            glyph_width: 8.0,
            cell_padding: 24,
        }
    }
}

/// Drag-to-scroll settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll distance per pixel of pointer travel.
    pub speed_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            speed_multiplier: 2.0,
        }
    }
}

/// All tunables of a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub layout: LayoutConfig,
    pub scroll: ScrollConfig,
}

/// A declarative table definition: columns plus configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableSpec {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub config: TableConfig,
}

impl TableSpec {
    /// Creates a spec from columns with default configuration.
    pub fn new(columns: Vec<Column>) -> Self {
        TableSpec {
            columns,
            config: TableConfig::default(),
        }
    }

    /// Parses and validates a YAML table definition.
    pub fn from_yaml(src: &str) -> Result<Self> {
        let spec: TableSpec = serde_yaml::from_str(src)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parses and validates a JSON table definition.
    pub fn from_json(src: &str) -> Result<Self> {
        let spec: TableSpec = serde_json::from_str(src)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Checks column keys for emptiness and duplicates.
    pub fn validate(&self) -> Result<()> {
        validate_columns(&self.columns)
    }
}
