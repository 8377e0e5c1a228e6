//! Gridline - a headless data table engine.
//!
//! Gridline holds the logic of an interactive data table and none of its
//! drawing. Given columns, rows and the user's interactions it produces a
//! [`RenderPlan`]: header cells, body cells, group rows, column widths and
//! frozen-column flags, ready for any view layer to draw.
//!
//! - **Column model**: [`Column`] with a [`CellKind`] per column (plain text,
//!   status, document, action, composite).
//! - **Cell rendering**: [`render_cell`] dispatches each cell on its kind and
//!   falls back to raw text when the data does not fit.
//! - **Sorting**: header clicks cycle asc → desc; numbers in text sort
//!   numerically (`"$5"` before `"$10"`). See [`gridline_sort`].
//! - **Width allocation**: [`allocate`] gives the first document column a
//!   share of the leftover container width.
//! - **Drag-to-scroll**: [`ScrollController`] turns pointer drags into a
//!   horizontal offset when the content overflows.
//! - **Orchestration**: [`DataTable`] owns all of the above for one table.
//!
//! Nothing here performs side effects. Clicks on documents, actions, rows,
//! headers and groups are reported through callbacks.
//!
//! # Quick Start
//!
//! ```rust
//! use gridline::{ActionCell, Column, DataTable, DocumentCell, PlanRow, PointerTarget, Row};
//!
//! let mut table = DataTable::new(vec![
//!     Column::new("file", "Document").document(DocumentCell::default()),
//!     Column::new("state", "Status").status().width(120),
//!     Column::new("next", "").action(ActionCell::new()).width(140),
//! ])
//! .unwrap()
//! .with_rows(vec![
//!     Row::group("Q1 2024"),
//!     Row::new().cell("file", "ledger.xlsx").cell("state", "Active").cell("next", "validate").child(),
//!     Row::new().cell("file", "notes.pdf").cell("state", "Cancelled").cell("next", "upload").child(),
//! ]);
//!
//! // The host measures its container after layout.
//! table.set_extent(1000, 1000);
//!
//! let plan = table.plan();
//! assert_eq!(plan.rows.len(), 3);
//! assert!(matches!(plan.rows[0], PlanRow::Group(_)));
//! // 1000 - 48 - 260 = 692, shrunk by 30%
//! assert_eq!(plan.header[0].width, Some(484));
//!
//! // Collapse the group: only the header remains.
//! table.click_row(0, PointerTarget::Surface);
//! assert_eq!(table.plan().rows.len(), 1);
//! ```
//!
//! # Declarative tables
//!
//! Tables can be defined in YAML or JSON; see [`TableSpec`].
//!
//! ```rust
//! use gridline::DataTable;
//!
//! let table = DataTable::from_yaml(r#"
//! columns:
//!   - { key: name, title: Name, sortable: true }
//!   - { key: state, title: State, cell: { kind: status } }
//! "#).unwrap();
//! assert_eq!(table.columns().len(), 2);
//! ```

mod cells;
mod column;
mod config;
mod error;
pub mod export;
mod handler;
mod layout;
mod row;
mod scroll;
mod sort;
mod table;
pub mod util;

pub use cells::{
    activate_cell, render_cell, ActionButton, ActionKind, ActionPreset, CellActivation,
    CellContent, CompositeContent, DocumentContent, RenderedPart, StatusCategory, StatusCell,
    TextCell, UnknownAction,
};
pub use column::{
    find_column, validate_columns, ActionCell, Affordance, Align, CellKind, Column, CompositeCell,
    Direction, DocumentCell, WidthHint,
};
pub use config::{LayoutConfig, ScrollConfig, TableConfig, TableSpec};
pub use error::{Result, TableError};
pub use handler::{
    ActionHandler, DocumentHandler, GroupToggleHandler, Handler, RowClickHandler, SortHandler,
};
pub use layout::{allocate, Allocation, EffectiveColumn};
pub use row::{CellValue, Fragment, Part, Row};
pub use scroll::{Measurement, Overflow, PointerTarget, ScrollController, ScrollState, Viewport};
pub use sort::{row_key, sort_rows, sorted_rows};
pub use table::{
    build_plan, visible_columns, DataRow, DataTable, Expansion, GroupRow, HeaderCell, PlanCell,
    PlanInput, PlanRow, RenderPlan, RowClick, TableHandlers,
};

pub use gridline_sort::{SortDirection, SortError, SortKey, SortState};
