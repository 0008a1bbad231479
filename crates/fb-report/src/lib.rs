//! Reporting and output for the FastBound importer.
//!
//! Turns a resolution trace into a [`MatchReport`] with remediation guidance,
//! copies source rows into the FastBound layout and writes the output
//! workbook.

pub mod guidance;
pub mod populate;
pub mod report;
pub mod xlsx;

pub use guidance::{FALLBACK_HINT, GUIDANCE_RULES, GuidanceRule, HINT_SEPARATOR, guidance_for_key};
pub use populate::{IMPORT_SHEET, populate};
pub use report::{
    ConfigIssue, GUIDANCE_HEADERS, GuidanceRow, MAPPING_REPORT_HEADERS, MatchReport, ReportRow,
    build_report,
};
pub use xlsx::{DATE_FORMAT, GUIDANCE_SHEET, MAPPING_REPORT_SHEET, write_workbook};
