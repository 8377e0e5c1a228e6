//! The table orchestrator.
//!
//! [`DataTable`] owns a column list, rows, and all interaction state of one
//! table: the sort, group expansion overrides, the visible column set and the
//! scroll controller. The host feeds it events and asks it for a
//! [`RenderPlan`] whenever it needs to draw.
//!
//! # Example
//!
//! ```
//! use gridline::{Column, DataTable, PlanRow, Row, SortDirection};
//! use std::sync::{Arc, Mutex};
//!
//! let sorts = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&sorts);
//!
//! let mut table = DataTable::new(vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("amount", "Amount").sortable().right(),
//! ])
//! .unwrap()
//! .on_sort(move |key, dir| sink.lock().unwrap().push((key.to_string(), dir)))
//! .with_rows(vec![
//!     Row::new().cell("name", "B").cell("amount", "$10"),
//!     Row::new().cell("name", "A").cell("amount", "$5"),
//! ]);
//!
//! table.click_header("amount");
//! assert_eq!(table.plan().data_order(), vec![1, 0]);
//!
//! table.click_header("amount");
//! assert_eq!(table.plan().data_order(), vec![0, 1]);
//! assert_eq!(sorts.lock().unwrap().last(), Some(&("amount".to_string(), SortDirection::Desc)));
//! ```

mod plan;

pub use plan::{
    build_plan, visible_columns, DataRow, Expansion, GroupRow, HeaderCell, PlanCell, PlanInput,
    PlanRow, RenderPlan,
};

use std::collections::HashSet;

use gridline_sort::{SortDirection, SortState};
use log::debug;

use crate::cells::{activate_cell, CellActivation};
use crate::column::{validate_columns, Column};
use crate::config::{TableConfig, TableSpec};
use crate::error::Result;
use crate::handler::{GroupToggleHandler, RowClickHandler, SortHandler};
use crate::row::{CellValue, Row};
use crate::scroll::{PointerTarget, ScrollController, ScrollState, Viewport};

/// Table-level callbacks.
#[derive(Clone, Debug, Default)]
pub struct TableHandlers {
    pub on_sort: Option<SortHandler>,
    pub on_row_click: Option<RowClickHandler>,
    pub on_group_toggle: Option<GroupToggleHandler>,
}

/// Outcome of a click on a body row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowClick {
    /// The click started on an interactive target and was left to it.
    Suppressed,
    /// A group header was toggled to the given expansion.
    Group { expanded: bool },
    /// The row-click callback was invoked.
    Row,
}

/// A data table: columns, rows and interaction state.
#[derive(Clone, Debug)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    visible: Option<HashSet<String>>,
    sort: SortState,
    expansion: Expansion,
    scroll: ScrollController,
    config: TableConfig,
    handlers: TableHandlers,
}

impl DataTable {
    /// Creates a table with default configuration.
    ///
    /// Fails if a column key is empty or repeated.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        DataTable::from_spec(TableSpec::new(columns))
    }

    /// Creates a table from a declarative definition.
    pub fn from_spec(spec: TableSpec) -> Result<Self> {
        spec.validate()?;
        Ok(DataTable {
            columns: spec.columns,
            rows: Vec::new(),
            visible: None,
            sort: SortState::none(),
            expansion: Expansion::new(),
            scroll: ScrollController::new(spec.config.scroll.clone()),
            config: spec.config,
            handlers: TableHandlers::default(),
        })
    }

    /// Loads a YAML definition. See [`TableSpec`].
    pub fn from_yaml(src: &str) -> Result<Self> {
        DataTable::from_spec(TableSpec::from_yaml(src)?)
    }

    /// Loads a JSON definition. See [`TableSpec`].
    pub fn from_json(src: &str) -> Result<Self> {
        DataTable::from_spec(TableSpec::from_json(src)?)
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_handlers(mut self, handlers: TableHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Sets the callback invoked with `(column key, direction)` after a
    /// header click changes the sort.
    pub fn on_sort(mut self, f: impl Fn(&str, SortDirection) + Send + Sync + 'static) -> Self {
        self.handlers.on_sort = Some(SortHandler::new(f));
        self
    }

    /// Sets the callback invoked with `(row, source index)` on row clicks.
    pub fn on_row_click(mut self, f: impl Fn(&Row, usize) + Send + Sync + 'static) -> Self {
        self.handlers.on_row_click = Some(RowClickHandler::new(f));
        self
    }

    /// Sets the callback invoked with the source index of a toggled group.
    pub fn on_group_toggle(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.handlers.on_group_toggle = Some(GroupToggleHandler::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Data
    // ------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Replaces the rows. Expansion overrides are dropped since they refer
    /// to row positions.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        debug!("table: {} rows", rows.len());
        self.rows = rows;
        self.expansion.clear();
        self.scroll.invalidate();
    }

    /// Replaces the columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> Result<()> {
        validate_columns(&columns)?;
        self.columns = columns;
        self.scroll.invalidate();
        Ok(())
    }

    pub fn set_config(&mut self, config: TableConfig) {
        self.scroll.set_config(config.scroll.clone());
        self.config = config;
        self.scroll.invalidate();
    }

    /// Shows exactly the given columns, plus the first column and every
    /// action column.
    pub fn set_visible_columns<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible = Some(keys.into_iter().map(Into::into).collect());
        self.scroll.invalidate();
    }

    /// Returns to each column's `visible_by_default`.
    pub fn reset_visible_columns(&mut self) {
        self.visible = None;
        self.scroll.invalidate();
    }

    /// Columns currently shown, in display order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        visible_columns(&self.columns, self.visible.as_ref())
    }

    fn visible_column(&self, key: &str) -> Option<&Column> {
        self.visible_columns().into_iter().find(|c| c.key == key)
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Sets the sort without invoking `on_sort`.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Handles a click on a header cell.
    ///
    /// Only visible, sortable columns respond. Returns the new direction.
    pub fn click_header(&mut self, key: &str) -> Option<SortDirection> {
        let sortable = self.visible_column(key).is_some_and(|c| c.sortable);
        if !sortable {
            return None;
        }
        let direction = self.sort.toggle(key);
        debug!("table: sort by '{}' {}", key, direction);
        if let Some(handler) = &self.handlers.on_sort {
            handler.call(key, direction);
        }
        Some(direction)
    }

    // ------------------------------------------------------------------
    // Groups and rows
    // ------------------------------------------------------------------

    /// Whether the group header at `index` shows its children.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| self.expansion.is_expanded(index, row))
    }

    /// Toggles the group header at source index `index`.
    ///
    /// Returns the new expansion, or `None` if the row is not a group header.
    pub fn toggle_group(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get(index).filter(|r| r.is_group)?;
        let expanded = self.expansion.toggle(index, row);
        debug!(
            "table: group '{}' at {} {}",
            row.group_label(),
            index,
            if expanded { "expanded" } else { "collapsed" }
        );
        if let Some(handler) = &self.handlers.on_group_toggle {
            handler.call(index);
        }
        self.scroll.invalidate();
        Some(expanded)
    }

    /// Handles a click on the row at source index `index`.
    ///
    /// Clicks that started on an interactive target are suppressed. Group
    /// headers toggle; other rows invoke `on_row_click`.
    pub fn click_row(&mut self, index: usize, target: PointerTarget) -> Option<RowClick> {
        let row = self.rows.get(index)?;
        if target.is_interactive() {
            return Some(RowClick::Suppressed);
        }
        if row.is_group {
            return self
                .toggle_group(index)
                .map(|expanded| RowClick::Group { expanded });
        }
        if let Some(handler) = &self.handlers.on_row_click {
            handler.call(row, index);
        }
        Some(RowClick::Row)
    }

    /// Activates the document or action cell at (`index`, `key`).
    pub fn activate_cell(&self, index: usize, key: &str) -> Option<CellActivation> {
        let row = self.rows.get(index)?;
        let column = self.visible_column(key)?;
        let value = row.get(key).unwrap_or(&CellValue::Empty);
        activate_cell(column, value, row)
    }

    /// Pointer target for a body cell of column `key`.
    pub fn target_for(&self, key: &str) -> PointerTarget {
        match self.visible_column(key) {
            Some(column) => PointerTarget::Cell {
                interactive: column.kind.is_interactive(),
            },
            None => PointerTarget::Surface,
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Feeds a viewport measurement. Returns `true` if `needs_scroll` changed,
    /// in which case the plan's widths may change too.
    pub fn measure<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        self.scroll.measure(viewport)
    }

    pub fn set_extent(&mut self, client_width: u32, scroll_width: u32) -> bool {
        self.scroll.set_extent(client_width, scroll_width)
    }

    /// Marks the measurement stale, e.g. on window resize.
    pub fn invalidate(&mut self) {
        self.scroll.invalidate();
    }

    pub fn needs_measure(&self) -> bool {
        self.scroll.is_stale()
    }

    pub fn pointer_down(&mut self, x: f64, target: PointerTarget) -> bool {
        self.scroll.pointer_down(x, target)
    }

    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        self.scroll.pointer_move(x)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.scroll.pointer_up()
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.scroll.pointer_leave()
    }

    pub fn wheel(&mut self, delta_x: f64) -> Option<f64> {
        self.scroll.wheel(delta_x)
    }

    pub fn set_scroll_left(&mut self, scroll_left: f64) {
        self.scroll.set_scroll_left(scroll_left);
    }

    /// Ends any drag in progress; call on teardown.
    pub fn cancel(&mut self) {
        self.scroll.cancel();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Builds the current render plan.
    pub fn plan(&self) -> RenderPlan {
        build_plan(&PlanInput {
            columns: &self.columns,
            rows: &self.rows,
            visible: self.visible.as_ref(),
            sort: &self.sort,
            expansion: &self.expansion,
            scroll: self.scroll.state(),
            container_width: self.scroll.measurement().client_width,
            config: &self.config,
        })
    }
}
