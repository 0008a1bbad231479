//! Spreadsheet ingestion for the FastBound importer.
//!
//! Reads one sheet of a workbook (or a CSV file) into a [`SheetTable`] whose
//! first row supplies the column headers.

pub mod csv_table;
pub mod workbook;

use std::path::Path;

use fb_model::{ImportError, Result, SheetTable};
use tracing::debug;

pub use csv_table::read_csv_table;
pub use workbook::{read_workbook_sheet, workbook_sheet_names};

/// Supported input file kinds, detected from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

fn detect_format(path: &Path) -> Result<SourceFormat> {
    if !path.exists() {
        return Err(ImportError::not_found(path));
    }
    SourceFormat::from_path(path).ok_or_else(|| {
        ImportError::config(format!(
            "unsupported spreadsheet format: {} (use .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)",
            path.display()
        ))
    })
}

/// Read a sheet with its data rows. `sheet` selects a workbook sheet by name
/// and defaults to the first one; it is ignored for CSV input.
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetTable> {
    let table = match detect_format(path)? {
        SourceFormat::Workbook => read_workbook_sheet(path, sheet)?,
        SourceFormat::Csv => {
            if let Some(name) = sheet {
                debug!(sheet = %name, path = %path.display(), "sheet name ignored for CSV input");
            }
            read_csv_table(path)?
        }
    };
    debug!(
        path = %path.display(),
        sheet = %table.name,
        columns = table.headers.len(),
        rows = table.row_count(),
        "read sheet"
    );
    Ok(table)
}

/// Read only the header row of a sheet.
pub fn read_headers(path: &Path, sheet: Option<&str>) -> Result<Vec<String>> {
    read_sheet(path, sheet).map(|table| table.headers)
}

/// Sheet names of a workbook; a CSV file has a single sheet named after it.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    match detect_format(path)? {
        SourceFormat::Workbook => workbook_sheet_names(path),
        SourceFormat::Csv => Ok(vec![
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string(),
        ]),
    }
}
