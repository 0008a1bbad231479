//! Saving a resolved mapping for reuse.
//!
//! The file is a JSON object of `target -> source` for every resolved column,
//! in template order, which is exactly the JSON override format. A reviewed
//! run can therefore be replayed with `--map saved.json`.

use std::fs;
use std::path::Path;

use fb_model::{ImportError, Mapping, Result};
use tracing::debug;

use crate::overrides::Overrides;

/// Overrides reproducing every resolved entry of `mapping`.
pub fn mapping_to_overrides(mapping: &Mapping) -> Overrides {
    mapping
        .iter()
        .filter_map(|entry| entry.source().map(|source| (entry.target(), source)))
        .collect()
}

/// Write `mapping` as a pretty-printed JSON override file.
pub fn save_mapping(path: &Path, mapping: &Mapping) -> Result<()> {
    let overrides = mapping_to_overrides(mapping);
    let mut object = serde_json::Map::new();
    for (target, source) in overrides.iter() {
        object.insert(
            target.to_string(),
            serde_json::Value::String(source.to_string()),
        );
    }
    let json = serde_json::to_string_pretty(&serde_json::Value::Object(object)).map_err(
        |error| ImportError::Write {
            path: path.to_path_buf(),
            message: error.to_string(),
        },
    )?;
    fs::write(path, json).map_err(|error| ImportError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    debug!(path = %path.display(), count = overrides.len(), "saved mapping");
    Ok(())
}
