//! Output workbook: populated data, mapping report and guidance sheets.

use std::fmt;
use std::path::Path;

use fb_model::{CellValue, ImportError, Result, SheetTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::report::{GUIDANCE_HEADERS, MAPPING_REPORT_HEADERS, MatchReport};

pub const MAPPING_REPORT_SHEET: &str = "Mapping Report";
pub const GUIDANCE_SHEET: &str = "Missing & Guidance";

/// Number format applied to date cells.
pub const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Write the populated sheet followed by the two report sheets.
pub fn write_workbook(path: &Path, populated: &SheetTable, report: &MatchReport) -> Result<()> {
    let write_error = |error: SheetError| ImportError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    let mut workbook = build_workbook(populated, report).map_err(write_error)?;
    workbook
        .save(path)
        .map_err(|error| write_error(SheetError::Xlsx(error)))?;
    info!(
        path = %path.display(),
        rows = populated.row_count(),
        columns = populated.headers.len(),
        "wrote output workbook"
    );
    Ok(())
}

#[derive(Debug)]
enum SheetError {
    Xlsx(XlsxError),
    OutOfRange { row: usize, col: usize },
}

impl From<XlsxError> for SheetError {
    fn from(error: XlsxError) -> Self {
        Self::Xlsx(error)
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx(error) => write!(f, "{error}"),
            Self::OutOfRange { row, col } => {
                write!(f, "cell at row {row}, column {col} is beyond worksheet limits")
            }
        }
    }
}

/// Zero-based position as rust_xlsxwriter row and column numbers.
fn cell_position(row: usize, col: usize) -> std::result::Result<(u32, u16), SheetError> {
    match (u32::try_from(row), u16::try_from(col)) {
        (Ok(row32), Ok(col16)) => Ok((row32, col16)),
        _ => Err(SheetError::OutOfRange { row, col }),
    }
}

fn build_workbook(
    populated: &SheetTable,
    report: &MatchReport,
) -> std::result::Result<Workbook, SheetError> {
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let mut workbook = Workbook::new();

    let data = workbook.add_worksheet().set_name(&populated.name)?;
    write_header(data, &populated.headers, &header_format)?;
    for (row_idx, row) in populated.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let (row32, col16) = cell_position(row_idx + 1, col_idx)?;
            write_cell(data, row32, col16, cell, &date_format)?;
        }
    }

    let mapping = workbook.add_worksheet().set_name(MAPPING_REPORT_SHEET)?;
    write_header(mapping, &MAPPING_REPORT_HEADERS, &header_format)?;
    for (row_idx, row) in report.rows.iter().enumerate() {
        for (col_idx, value) in row.cells().into_iter().enumerate() {
            let (row32, col16) = cell_position(row_idx + 1, col_idx)?;
            mapping.write_string(row32, col16, value)?;
        }
    }
    set_widths(mapping, &[32.0, 32.0, 20.0, 36.0])?;

    let guidance = workbook.add_worksheet().set_name(GUIDANCE_SHEET)?;
    write_header(guidance, &GUIDANCE_HEADERS, &header_format)?;
    for (row_idx, row) in report.guidance.iter().enumerate() {
        let (row32, _) = cell_position(row_idx + 1, 0)?;
        guidance.write_string(row32, 0, &row.target)?;
        guidance.write_string(row32, 1, &row.guidance)?;
    }
    set_widths(guidance, &[32.0, 90.0])?;

    Ok(workbook)
}

fn write_header<S: AsRef<str>>(
    sheet: &mut Worksheet,
    headers: &[S],
    format: &Format,
) -> std::result::Result<(), SheetError> {
    for (col_idx, header) in headers.iter().enumerate() {
        let (_, col16) = cell_position(0, col_idx)?;
        sheet.write_string_with_format(0, col16, header.as_ref(), format)?;
    }
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    date_format: &Format,
) -> std::result::Result<(), SheetError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(text) => {
            sheet.write_string(row, col, text)?;
        }
        CellValue::Number(value) => {
            sheet.write_number(row, col, *value)?;
        }
        CellValue::Bool(value) => {
            sheet.write_boolean(row, col, *value)?;
        }
        CellValue::DateTime(serial) => {
            sheet.write_number_with_format(row, col, *serial, date_format)?;
        }
    }
    Ok(())
}

fn set_widths(sheet: &mut Worksheet, widths: &[f64]) -> std::result::Result<(), SheetError> {
    for (col_idx, width) in widths.iter().enumerate() {
        let (_, col16) = cell_position(0, col_idx)?;
        sheet.set_column_width(col16, *width)?;
    }
    Ok(())
}
