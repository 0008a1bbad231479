pub mod error;
pub mod mapping;
pub mod options;
pub mod table;

pub use error::{ImportError, Result};
pub use mapping::{
    IgnoredOverride, Mapping, MappingEntry, MatchDetail, MatchKind, MatchTrace, TraceRecord,
};
pub use options::{DEFAULT_FUZZY_CUTOFF, ResolveOptions};
pub use table::{CellValue, SheetTable};
