//! CLI library components for the FastBound importer.

pub mod import;
pub mod logging;
