//! Workbook sheet reading through calamine (xlsx, xlsm, xlsb, xls, ods).

use std::iter;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use fb_model::{CellValue, ImportError, Result, SheetTable};
use tracing::info;

/// Sheet names in workbook order.
pub fn workbook_sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|error| spreadsheet_error(path, &error))?;
    Ok(workbook.sheet_names())
}

/// Read one sheet; `None` selects the first sheet.
pub fn read_workbook_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|error| spreadsheet_error(path, &error))?;
    let names = workbook.sheet_names();
    let name = match sheet {
        Some(requested) => {
            if !names.iter().any(|name| name == requested) {
                return Err(ImportError::config(format!(
                    "sheet '{requested}' not found in {} (available: {})",
                    path.display(),
                    names.join(", ")
                )));
            }
            requested.to_string()
        }
        None => {
            let Some(first) = names.first() else {
                return Err(ImportError::config(format!(
                    "{} contains no sheets",
                    path.display()
                )));
            };
            info!(
                path = %path.display(),
                sheet = %first,
                "no sheet specified; using the first sheet"
            );
            first.clone()
        }
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|error| spreadsheet_error(path, &error))?;
    // The range starts at the first used cell; blank leading columns are
    // restored so positions match the sheet.
    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| {
            iter::repeat_n(String::new(), offset)
                .chain(row.iter().map(|cell| cell_value(cell).to_string()))
                .collect()
        })
        .unwrap_or_default();

    let mut table = SheetTable::new(name, headers);
    for row in rows {
        let values: Vec<CellValue> = iter::repeat_n(CellValue::Empty, offset)
            .chain(row.iter().map(cell_value))
            .collect();
        if values.iter().all(CellValue::is_empty) {
            continue;
        }
        table.push_row(values);
    }
    Ok(table)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) if text.is_empty() => CellValue::Empty,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            CellValue::Text(text.clone())
        }
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        // 1900 date system assumed.
        Data::DateTime(value) => CellValue::DateTime(value.as_f64()),
        Data::Error(error) => CellValue::Text(format!("#{error:?}")),
    }
}

fn spreadsheet_error(path: &Path, error: &dyn std::fmt::Display) -> ImportError {
    ImportError::Spreadsheet {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
