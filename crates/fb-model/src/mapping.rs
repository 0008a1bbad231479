//! Column mapping types produced by the resolver.
//!
//! A [`Mapping`] holds exactly one [`MappingEntry`] per template (target)
//! column, in template order. The [`MatchTrace`] carries the same decisions
//! together with the evidence behind each one, for the mapping report.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a target column's source was determined.
///
/// Variants are declared in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    /// Override reference named a source column literally.
    Override,
    /// Override reference matched a source column after normalization.
    OverrideNormalized,
    /// Override reference did not match any source column.
    OverrideNotFound,
    /// Normalized target name equals a normalized source name.
    Direct,
    /// A synonym from the target's alias group was found in the source.
    Alias,
    /// Best approximate match at or above the similarity cutoff.
    Fuzzy,
    /// No source column could be determined.
    Missing,
}

impl MatchKind {
    /// Label used in the mapping report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Override => "OVERRIDE",
            Self::OverrideNormalized => "OVERRIDE(norm)",
            Self::OverrideNotFound => "OVERRIDE-NOTFOUND",
            Self::Direct => "DIRECT",
            Self::Alias => "ALIAS",
            Self::Fuzzy => "FUZZY",
            Self::Missing => "MISSING",
        }
    }

    /// True for the three outcomes of an explicit override.
    pub fn is_override(&self) -> bool {
        matches!(
            self,
            Self::Override | Self::OverrideNormalized | Self::OverrideNotFound
        )
    }

    /// True when the target column ends up without a source.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::OverrideNotFound | Self::Missing)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One resolved target column. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    target: String,
    source: Option<String>,
    kind: MatchKind,
}

impl MappingEntry {
    pub fn new(target: impl Into<String>, source: Option<String>, kind: MatchKind) -> Self {
        Self {
            target: target.into(),
            source,
            kind,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }
}

/// Ordered target → source mapping, one entry per target column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
}

impl Mapping {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a target column (first one when the template repeats a header).
    pub fn get(&self, target: &str) -> Option<&MappingEntry> {
        self.entries.iter().find(|entry| entry.target == target)
    }

    pub fn resolved_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.source.is_some())
            .count()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter().filter(|entry| entry.kind.is_unresolved())
    }

    pub fn has_unresolved(&self) -> bool {
        self.unresolved().next().is_some()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Evidence recorded alongside a match decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MatchDetail {
    None,
    /// The override reference exactly as written in the override file.
    OverrideReference(String),
    /// Canonical key of the alias group that produced the match.
    AliasGroup(String),
    /// Best similarity score seen (also kept for misses, as a diagnostic).
    Similarity(f64),
}

impl MatchDetail {
    /// Short human-readable description for the report's detail column.
    pub fn describe(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::OverrideReference(reference) => format!("override reference '{reference}'"),
            Self::AliasGroup(group) => format!("alias group '{group}'"),
            Self::Similarity(score) => format!("similarity {score:.3}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub entry: MappingEntry,
    pub detail: MatchDetail,
}

/// Override entry whose target column is not part of the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredOverride {
    pub target: String,
    pub reference: String,
}

/// Full record of a resolution run, in target-column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTrace {
    records: Vec<TraceRecord>,
    ignored_overrides: Vec<IgnoredOverride>,
}

impl MatchTrace {
    pub fn new(records: Vec<TraceRecord>, ignored_overrides: Vec<IgnoredOverride>) -> Self {
        Self {
            records,
            ignored_overrides,
        }
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn ignored_overrides(&self) -> &[IgnoredOverride] {
        &self.ignored_overrides
    }

    /// The mapping these records describe.
    pub fn mapping(&self) -> Mapping {
        Mapping::new(
            self.records
                .iter()
                .map(|record| record.entry.clone())
                .collect(),
        )
    }

    pub fn count_by_kind(&self) -> BTreeMap<MatchKind, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.entry.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_of(&self, kind: MatchKind) -> usize {
        self.records
            .iter()
            .filter(|record| record.entry.kind() == kind)
            .count()
    }
}
