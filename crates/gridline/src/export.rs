//! CSV export of a render plan.

use crate::error::Result;
use crate::table::{PlanRow, RenderPlan};

/// Writes the visible content of `plan` as CSV.
///
/// The first record holds the column titles. Data rows carry the untruncated
/// text of each cell; group headers become a record with the group name in
/// the first field and the rest empty.
///
/// ```
/// use gridline::{export, Column, DataTable, Row};
///
/// let table = DataTable::new(vec![Column::new("name", "Name"), Column::new("amount", "Amount")])
///     .unwrap()
///     .with_rows(vec![Row::new().cell("name", "Acme, Inc.").cell("amount", 12)]);
///
/// let csv = export::to_csv(&table.plan()).unwrap();
/// assert_eq!(csv, "Name,Amount\n\"Acme, Inc.\",12\n");
/// ```
pub fn to_csv(plan: &RenderPlan) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(plan.header.iter().map(|h| h.title.as_str()))?;

    let width = plan.column_count();
    for row in &plan.rows {
        let record: Vec<String> = match row {
            PlanRow::Group(group) => {
                let mut record = vec![String::new(); width.max(1)];
                record[0] = group.name.clone();
                record
            }
            PlanRow::Data(data) => data.cells.iter().map(|c| c.content.plain_text()).collect(),
        };
        wtr.write_record(&record)?;
    }

    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, CompositeCell};
    use crate::row::{Part, Row};
    use crate::table::DataTable;

    #[test]
    fn groups_and_truncated_text() {
        let table = DataTable::new(vec![
            Column::new("name", "Name").width(40),
            Column::new("tags", "Tags").composite(CompositeCell::horizontal()),
        ])
        .unwrap()
        .with_rows(vec![
            Row::group("Q1"),
            Row::new()
                .cell("name", "a very long file name.pdf")
                .cell("tags", vec![Part::badge("new"), Part::label("draft")])
                .child(),
        ]);
        let csv = to_csv(&table.plan()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["Name,Tags", "Q1,", "a very long file name.pdf,new draft"]);
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = DataTable::new(vec![Column::new("a", "A")]).unwrap();
        assert_eq!(to_csv(&table.plan()).unwrap(), "A\n");
    }
}
