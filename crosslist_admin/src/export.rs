//! CSV export of what a list view currently shows.

use crate::error::DashboardResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use table_engine::{ColumnDescriptor, Record, Table};

/// Write the table's sorted and filtered rows (all pages) as CSV.
///
/// Checkbox columns are skipped; cells use the same text as the grid.
/// Returns the number of data rows written.
pub fn write_csv<R: Record, W: Write>(table: &Table<R>, writer: W) -> DashboardResult<usize> {
    let columns: Vec<&ColumnDescriptor<R>> = table
        .columns()
        .iter()
        .filter(|column| !column.is_checkbox())
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns.iter().map(|column| column.header()))?;

    let mut rows = 0;
    for record in table.processed_records() {
        csv_writer.write_record(columns.iter().map(|column| column.text(record)))?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}

pub fn export_csv<R: Record>(table: &Table<R>, path: &Path) -> DashboardResult<usize> {
    let file = File::create(path)?;
    let rows = write_csv(table, BufWriter::new(file))?;
    log::info!("Exported {} rows to {}", rows, path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionSet;
    use serde_json::{json, Value as Json};
    use table_engine::TableConfig;

    fn table() -> Table<Json> {
        let selection = SelectionSet::new();
        Table::new(
            vec![
                ColumnDescriptor::checkbox("select", "", selection.checkbox_props()),
                ColumnDescriptor::new("title", "Title").filterable(true),
                ColumnDescriptor::new("price", "Price")
                    .render(|r: &Json| format!("{:.2}", r["price"].as_f64().unwrap_or(0.0))),
            ],
            TableConfig::default().filtering(true).page_size(1),
        )
        .unwrap()
        .with_records(vec![
            json!({"id": 1, "title": "Lamp, brass", "price": 12}),
            json!({"id": 2, "title": "Chair", "price": 30.5}),
            json!({"id": 3, "title": "Lamp shade", "price": 4}),
        ])
    }

    #[test]
    fn test_writes_processed_rows_across_pages() {
        let mut table = table();
        table.toggle_sort("price");

        let mut out = Vec::new();
        let rows = write_csv(&table, &mut out).unwrap();

        assert_eq!(rows, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Title,Price\nLamp shade,4.00\n\"Lamp, brass\",12.00\nChair,30.50\n"
        );
    }

    #[test]
    fn test_respects_filters() {
        let mut table = table();
        table.set_filter("title", "lamp");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let rows = export_csv(&table, &path).unwrap();

        assert_eq!(rows, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title,Price\n"));
        assert!(!content.contains("Chair"));
    }
}
