//! The render plan and the pure function that builds it.

use std::collections::{BTreeMap, HashSet};

use gridline_sort::{SortDirection, SortState};
use serde::Serialize;

use crate::cells::{render_cell, CellContent};
use crate::column::{Align, Column};
use crate::config::TableConfig;
use crate::layout::allocate;
use crate::row::{CellValue, Row};
use crate::scroll::ScrollState;
use crate::sort::sort_rows;

/// Everything the view layer needs to draw a table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPlan {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<PlanRow>,
    pub scroll: ScrollState,
}

impl RenderPlan {
    /// Number of visible columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Source indices of the rendered rows, in display order.
    pub fn source_order(&self) -> Vec<usize> {
        self.rows.iter().map(PlanRow::source_index).collect()
    }

    /// Source indices of the rendered data rows, in display order.
    pub fn data_order(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter_map(|r| match r {
                PlanRow::Data(data) => Some(data.source_index),
                PlanRow::Group(_) => None,
            })
            .collect()
    }

    /// Keys of the visible columns, in display order.
    pub fn column_keys(&self) -> Vec<&str> {
        self.header.iter().map(|h| h.key.as_str()).collect()
    }
}

/// One header cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Align,
    pub sortable: bool,
    /// Direction indicator; set only on the sorted column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pinned while the body scrolls horizontally.
    pub frozen: bool,
}

/// A body row of the plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanRow {
    /// Merged group header spanning every column.
    Group(GroupRow),
    /// Regular row with one cell per visible column.
    Data(DataRow),
}

impl PlanRow {
    /// Index of the row in the caller's data.
    pub fn source_index(&self) -> usize {
        match self {
            PlanRow::Group(g) => g.source_index,
            PlanRow::Data(d) => d.source_index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupRow {
    pub source_index: usize,
    pub name: String,
    pub expanded: bool,
    /// Children that follow the header in display order, shown or not.
    pub child_count: usize,
    /// Number of columns the merged row spans.
    pub span: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataRow {
    pub source_index: usize,
    /// Indented as a member of the preceding group.
    pub child: bool,
    pub cells: Vec<PlanCell>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanCell {
    pub key: String,
    pub content: CellContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub frozen: bool,
    /// Pointer-downs here belong to the cell, not the table.
    pub interactive: bool,
}

/// Group expansion overrides, keyed by source row index.
///
/// A group without an override follows its row's `is_expanded` flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    overrides: BTreeMap<usize, bool>,
}

impl Expansion {
    pub fn new() -> Self {
        Expansion::default()
    }

    /// Whether the group header at `index` shows its children.
    pub fn is_expanded(&self, index: usize, row: &Row) -> bool {
        self.overrides
            .get(&index)
            .copied()
            .unwrap_or_else(|| row.is_expanded())
    }

    /// Flips the group at `index` and returns its new state.
    pub fn toggle(&mut self, index: usize, row: &Row) -> bool {
        let next = !self.is_expanded(index, row);
        self.overrides.insert(index, next);
        next
    }

    pub fn set(&mut self, index: usize, expanded: bool) {
        self.overrides.insert(index, expanded);
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Columns shown for a visibility set.
///
/// With no set, each column's `visible_by_default` decides. The first column
/// and every action column are always shown.
pub fn visible_columns<'a>(
    columns: &'a [Column],
    visible: Option<&HashSet<String>>,
) -> Vec<&'a Column> {
    columns
        .iter()
        .enumerate()
        .filter(|(i, column)| {
            *i == 0
                || column.kind.is_action()
                || match visible {
                    Some(set) => set.contains(&column.key),
                    None => column.visible_by_default,
                }
        })
        .map(|(_, column)| column)
        .collect()
}

/// Inputs of [`build_plan`].
#[derive(Clone, Copy, Debug)]
pub struct PlanInput<'a> {
    pub columns: &'a [Column],
    pub rows: &'a [Row],
    pub visible: Option<&'a HashSet<String>>,
    pub sort: &'a SortState,
    pub expansion: &'a Expansion,
    pub scroll: ScrollState,
    /// Measured container width; zero when not measured yet.
    pub container_width: u32,
    pub config: &'a TableConfig,
}

/// Builds a render plan.
///
/// Columns are filtered by visibility, widths allocated (unless the table
/// already scrolls), rows sorted against the visible columns, and group
/// children hidden under collapsed headers.
pub fn build_plan(input: &PlanInput<'_>) -> RenderPlan {
    let columns = visible_columns(input.columns, input.visible);
    let layout = allocate(
        columns.iter().copied(),
        input.container_width,
        input.scroll.needs_scroll,
        &input.config.layout,
    );
    let order = sort_rows(input.rows, input.sort, columns.iter().copied());
    let frozen: Vec<bool> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| input.scroll.needs_scroll && (i == 0 || c.frozen))
        .collect();

    let header = layout
        .columns
        .iter()
        .zip(&frozen)
        .map(|(effective, &frozen)| {
            let column = effective.column;
            HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                align: column.header_alignment(),
                sortable: column.sortable,
                sort: input.sort.direction_for(&column.key),
                width: effective.width,
                frozen,
            }
        })
        .collect();

    let child_counts = count_children(input.rows, &order);
    let mut rows = Vec::with_capacity(order.len());
    // Expansion of the group currently owning child rows.
    let mut open_group: Option<bool> = None;

    for (pos, &index) in order.iter().enumerate() {
        let row = &input.rows[index];
        if row.is_group {
            let expanded = input.expansion.is_expanded(index, row);
            open_group = Some(expanded);
            rows.push(PlanRow::Group(GroupRow {
                source_index: index,
                name: row.group_label().to_string(),
                expanded,
                child_count: child_counts[pos],
                span: columns.len(),
            }));
            continue;
        }
        if row.is_group_child {
            if open_group == Some(false) {
                continue;
            }
        } else {
            open_group = None;
        }

        let cells = layout
            .columns
            .iter()
            .zip(&frozen)
            .map(|(effective, &frozen)| {
                let column = effective.column;
                let value = row.get(&column.key).unwrap_or(&CellValue::Empty);
                PlanCell {
                    key: column.key.clone(),
                    content: render_cell(column, value, effective.width, &input.config.layout),
                    width: effective.width,
                    frozen,
                    interactive: column.kind.is_interactive(),
                }
            })
            .collect();
        rows.push(PlanRow::Data(DataRow {
            source_index: index,
            child: row.is_group_child,
            cells,
        }));
    }

    RenderPlan {
        header,
        rows,
        scroll: input.scroll,
    }
}

// For each display position holding a group header, the number of child rows
// that immediately follow it.
fn count_children(rows: &[Row], order: &[usize]) -> Vec<usize> {
    let mut counts = vec![0; order.len()];
    let mut header: Option<usize> = None;
    for (pos, &index) in order.iter().enumerate() {
        let row = &rows[index];
        if row.is_group {
            header = Some(pos);
        } else if row.is_group_child {
            if let Some(h) = header {
                counts[h] += 1;
            }
        } else {
            header = None;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ActionCell, DocumentCell};
    use crate::scroll::ScrollController;

    fn input<'a>(
        columns: &'a [Column],
        rows: &'a [Row],
        sort: &'a SortState,
        expansion: &'a Expansion,
        config: &'a TableConfig,
    ) -> PlanInput<'a> {
        PlanInput {
            columns,
            rows,
            visible: None,
            sort,
            expansion,
            scroll: ScrollController::default().state(),
            container_width: 0,
            config,
        }
    }

    fn grouped_rows() -> Vec<Row> {
        vec![
            Row::group("Q1"),
            Row::new().cell("name", "a.pdf").child(),
            Row::new().cell("name", "b.pdf").child(),
            Row::group("Q2").expanded(false),
            Row::new().cell("name", "c.pdf").child(),
            Row::new().cell("name", "loose.pdf"),
        ]
    }

    #[test]
    fn first_and_action_columns_are_always_visible() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("amount", "Amount"),
            Column::new("go", "Go").action(ActionCell::new()),
            Column::new("note", "Note").hidden(),
        ];
        let keys = |v: Vec<&Column>| v.iter().map(|c| c.key.clone()).collect::<Vec<_>>();

        let none: HashSet<String> = HashSet::new();
        assert_eq!(keys(visible_columns(&columns, Some(&none))), vec!["name", "go"]);

        let some: HashSet<String> = ["note".to_string()].into_iter().collect();
        assert_eq!(keys(visible_columns(&columns, Some(&some))), vec!["name", "go", "note"]);

        assert_eq!(keys(visible_columns(&columns, None)), vec!["name", "amount", "go"]);
    }

    #[test]
    fn collapsed_groups_hide_children() {
        let columns = vec![Column::new("name", "Name")];
        let rows = grouped_rows();
        let (sort, expansion, config) = (SortState::none(), Expansion::new(), TableConfig::default());
        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));

        assert_eq!(plan.source_order(), vec![0, 1, 2, 3, 5]);
        match &plan.rows[0] {
            PlanRow::Group(g) => {
                assert_eq!(g.name, "Q1");
                assert!(g.expanded);
                assert_eq!(g.child_count, 2);
                assert_eq!(g.span, 1);
            }
            other => panic!("expected group, got {:?}", other),
        }
        match &plan.rows[3] {
            PlanRow::Group(g) => {
                assert!(!g.expanded);
                assert_eq!(g.child_count, 1);
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn expansion_overrides_row_flags() {
        let columns = vec![Column::new("name", "Name")];
        let rows = grouped_rows();
        let mut expansion = Expansion::new();
        assert!(!expansion.toggle(0, &rows[0]));
        assert!(expansion.toggle(3, &rows[3]));
        let (sort, config) = (SortState::none(), TableConfig::default());
        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));
        assert_eq!(plan.source_order(), vec![0, 3, 4, 5]);
    }

    #[test]
    fn header_reports_sort_and_alignment() {
        let columns = vec![
            Column::new("name", "Name").sortable(),
            Column::new("amount", "Amount").right().sortable(),
        ];
        let rows = vec![
            Row::new().cell("name", "B").cell("amount", "$10"),
            Row::new().cell("name", "A").cell("amount", "$5"),
        ];
        let sort = SortState::asc("amount");
        let (expansion, config) = (Expansion::new(), TableConfig::default());
        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));

        assert_eq!(plan.data_order(), vec![1, 0]);
        assert_eq!(plan.header[0].sort, None);
        assert_eq!(plan.header[1].sort, Some(SortDirection::Asc));
        assert_eq!(plan.header[1].align, Align::Right);
    }

    #[test]
    fn frozen_only_while_scrolling() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("a", "A"),
            Column::new("b", "B").frozen(),
        ];
        let rows = vec![Row::new().cell("name", "x")];
        let (sort, expansion, config) = (SortState::none(), Expansion::new(), TableConfig::default());

        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));
        assert!(plan.header.iter().all(|h| !h.frozen));

        let mut scroll = ScrollController::default();
        scroll.set_extent(300, 900);
        let mut scrolling = input(&columns, &rows, &sort, &expansion, &config);
        scrolling.scroll = scroll.state();
        let plan = build_plan(&scrolling);
        let frozen: Vec<bool> = plan.header.iter().map(|h| h.frozen).collect();
        assert_eq!(frozen, vec![true, false, true]);
        match &plan.rows[0] {
            PlanRow::Data(d) => assert!(d.cells[0].frozen),
            other => panic!("expected data row, got {:?}", other),
        }
    }

    #[test]
    fn anchor_width_reaches_cells() {
        let columns = vec![
            Column::new("name", "Name").document(DocumentCell::default()),
            Column::new("amount", "Amount").width(100),
        ];
        let rows = vec![Row::new().cell("name", "x.pdf").cell("amount", 1)];
        let (sort, expansion, config) = (SortState::none(), Expansion::new(), TableConfig::default());
        let mut measured = input(&columns, &rows, &sort, &expansion, &config);
        measured.container_width = 850;
        let plan = build_plan(&measured);
        // (850 - 48 - 100) * 0.7 = 491.4
        assert_eq!(plan.header[0].width, Some(491));
        match &plan.rows[0] {
            PlanRow::Data(d) => {
                assert_eq!(d.cells[0].width, Some(491));
                assert!(d.cells[0].interactive);
                assert!(!d.cells[1].interactive);
            }
            other => panic!("expected data row, got {:?}", other),
        }
    }

    #[test]
    fn missing_cells_render_empty() {
        let columns = vec![Column::new("name", "Name"), Column::new("other", "Other")];
        let rows = vec![Row::new().cell("name", "x")];
        let (sort, expansion, config) = (SortState::none(), Expansion::new(), TableConfig::default());
        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));
        match &plan.rows[0] {
            PlanRow::Data(d) => assert_eq!(d.cells[1].content.plain_text(), ""),
            other => panic!("expected data row, got {:?}", other),
        }
    }

    #[test]
    fn plan_serializes_to_json() {
        let columns = vec![Column::new("name", "Name")];
        let rows = grouped_rows();
        let (sort, expansion, config) = (SortState::none(), Expansion::new(), TableConfig::default());
        let plan = build_plan(&input(&columns, &rows, &sort, &expansion, &config));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["rows"][0]["type"], "group");
        assert_eq!(json["rows"][1]["type"], "data");
        assert_eq!(json["rows"][1]["cells"][0]["content"]["type"], "text");
        assert_eq!(json["scroll"]["overflow"], "hidden");
    }
}
