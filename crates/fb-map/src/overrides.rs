//! Manual mapping overrides.
//!
//! An override file pins a FastBound column to an A&D source column. Three
//! formats are accepted, chosen by file extension:
//!
//! - CSV with the columns `FastBound Column` and `ATF Source`
//! - JSON object: `{ "FastBound Column": "ATF Source", ... }`
//! - YAML mapping with the same shape as the JSON object
//!
//! Entries keep the order in which they appear in the file.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use fb_model::{ImportError, Result};
use tracing::debug;

/// CSV header naming the FastBound (target) column.
pub const TARGET_HEADER: &str = "FastBound Column";
/// CSV header naming the A&D (source) column.
pub const SOURCE_HEADER: &str = "ATF Source";

/// Ordered target → source overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, String)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override. A repeated target keeps its original position and
    /// takes the new source.
    pub fn insert(&mut self, target: impl Into<String>, source: impl Into<String>) {
        let target = target.into();
        let source = source.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == target) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((target, source)),
        }
    }

    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == target)
            .map(|(_, source)| source.as_str())
    }

    pub fn contains(&self, target: &str) -> bool {
        self.get(target).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(target, source)| (target.as_str(), source.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Into<String>, S: Into<String>> FromIterator<(T, S)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (target, source) in iter {
            overrides.insert(target, source);
        }
        overrides
    }
}

/// Load overrides from a CSV, JSON or YAML file.
///
/// # Errors
///
/// - [`ImportError::NotFound`] if the file does not exist
/// - [`ImportError::Config`] for unsupported extensions or malformed content
/// - [`ImportError::Validation`] when required fields are absent
pub fn load_overrides(path: &Path) -> Result<Overrides> {
    if !path.exists() {
        return Err(ImportError::not_found(path));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let overrides = match extension.as_str() {
        "csv" => parse_csv(path, &fs::read(path)?)?,
        "json" => parse_json(path, &fs::read_to_string(path)?)?,
        "yml" | "yaml" => parse_yaml(path, &fs::read_to_string(path)?)?,
        _ => {
            return Err(ImportError::config(format!(
                "unsupported override format for {} (use .csv, .json, .yml or .yaml)",
                path.display()
            )));
        }
    };
    debug!(
        path = %path.display(),
        count = overrides.len(),
        "loaded mapping overrides"
    );
    Ok(overrides)
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn parse_csv(path: &Path, bytes: &[u8]) -> Result<Overrides> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|error| {
            ImportError::config(format!("malformed CSV in {}: {error}", path.display()))
        })?
        .clone();
    let position = |name: &str| headers.iter().position(|h| normalize_header(h) == name);
    let (Some(target_idx), Some(source_idx)) = (position(TARGET_HEADER), position(SOURCE_HEADER))
    else {
        return Err(ImportError::validation(format!(
            "override CSV {} must have columns '{TARGET_HEADER}' and '{SOURCE_HEADER}'",
            path.display()
        )));
    };

    let mut overrides = Overrides::new();
    for (idx, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = record.map_err(|error| {
            ImportError::config(format!("malformed CSV in {}: {error}", path.display()))
        })?;
        let target = record.get(target_idx).map(str::trim).unwrap_or_default();
        let source = record.get(source_idx).map(str::trim).unwrap_or_default();
        if target.is_empty() {
            return Err(ImportError::validation(format!(
                "{} line {line}: missing '{TARGET_HEADER}'",
                path.display()
            )));
        }
        if source.is_empty() {
            return Err(ImportError::validation(format!(
                "{} line {line}: missing '{SOURCE_HEADER}' for '{target}'",
                path.display()
            )));
        }
        overrides.insert(target, source);
    }
    Ok(overrides)
}

fn parse_json(path: &Path, content: &str) -> Result<Overrides> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|error| {
        ImportError::config(format!("malformed JSON in {}: {error}", path.display()))
    })?;
    let serde_json::Value::Object(map) = value else {
        return Err(ImportError::config(format!(
            "override JSON {} must be an object of column names",
            path.display()
        )));
    };
    let mut overrides = Overrides::new();
    for (target, value) in map {
        let source = match value {
            serde_json::Value::String(text) => text,
            serde_json::Value::Number(number) => number.to_string(),
            serde_json::Value::Bool(flag) => flag.to_string(),
            _ => {
                return Err(ImportError::validation(format!(
                    "{}: override for '{target}' must be a column name",
                    path.display()
                )));
            }
        };
        overrides.insert(target, source);
    }
    Ok(overrides)
}

fn parse_yaml(path: &Path, content: &str) -> Result<Overrides> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|error| {
        ImportError::config(format!("malformed YAML in {}: {error}", path.display()))
    })?;
    let map = match value {
        serde_yaml::Value::Null => return Ok(Overrides::new()),
        serde_yaml::Value::Mapping(map) => map,
        _ => {
            return Err(ImportError::config(format!(
                "override YAML {} must be a mapping of column names",
                path.display()
            )));
        }
    };
    let mut overrides = Overrides::new();
    for (key, value) in map {
        let Some(target) = yaml_scalar(&key) else {
            return Err(ImportError::validation(format!(
                "{}: override keys must be column names",
                path.display()
            )));
        };
        let Some(source) = yaml_scalar(&value) else {
            return Err(ImportError::validation(format!(
                "{}: override for '{target}' must be a column name",
                path.display()
            )));
        };
        overrides.insert(target, source);
    }
    Ok(overrides)
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(text) => Some(text.clone()),
        serde_yaml::Value::Number(number) => Some(number.to_string()),
        serde_yaml::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
