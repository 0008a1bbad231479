use fb_model::{CellValue, Mapping, SheetTable};
use tracing::debug;

/// Sheet name of the populated FastBound data.
pub const IMPORT_SHEET: &str = "FastBoundImport";

/// Copy source rows into the target layout.
///
/// Headers are the target columns in mapping order. Each resolved entry
/// copies the first source column with that exact name; unresolved entries
/// stay empty. The row count always equals the source row count.
pub fn populate(mapping: &Mapping, source: &SheetTable) -> SheetTable {
    let headers = mapping
        .iter()
        .map(|entry| entry.target().to_string())
        .collect();
    let columns: Vec<Option<usize>> = mapping
        .iter()
        .map(|entry| entry.source().and_then(|name| source.column_index(name)))
        .collect();

    let mut table = SheetTable::new(IMPORT_SHEET, headers);
    for row in &source.rows {
        let values = columns
            .iter()
            .map(|column| {
                column
                    .and_then(|index| row.get(index))
                    .cloned()
                    .unwrap_or(CellValue::Empty)
            })
            .collect();
        table.push_row(values);
    }
    debug!(
        columns = table.headers.len(),
        copied = columns.iter().filter(|column| column.is_some()).count(),
        rows = table.row_count(),
        "populated import sheet"
    );
    table
}
