use std::path::Path;

use csv::ReaderBuilder;
use fb_model::{CellValue, ImportError, Result, SheetTable};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim_matches('\u{feff}');
    if trimmed.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Read a CSV file as a single sheet named after the file stem.
///
/// The first record is the header row. Cells are kept as text so values such
/// as serial numbers with leading zeros survive unchanged.
pub fn read_csv_table(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record
            .map_err(|error| csv_error(path, &error))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => Vec::new(),
    };

    let mut table = SheetTable::new(name, headers);
    for record in records {
        let record = record.map_err(|error| csv_error(path, &error))?;
        let row: Vec<CellValue> = record.iter().map(normalize_cell).collect();
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        table.push_row(row);
    }
    Ok(table)
}

fn csv_error(path: &Path, error: &csv::Error) -> ImportError {
    ImportError::Spreadsheet {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
