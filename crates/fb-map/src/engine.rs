//! Resolver: decides which source column feeds each target column.
//!
//! Resolution runs in two passes. Overrides are applied first and are
//! authoritative: a target named in the override file is never retried by
//! the automatic rules, even when its reference does not exist. Every other
//! target is tried, in order, against:
//!
//! 1. a direct match on the normalized name,
//! 2. the alias dictionary,
//! 3. fuzzy similarity at or above the configured cutoff,
//!
//! and is reported as missing when all three fail.

use std::collections::BTreeMap;

use fb_model::{
    IgnoredOverride, Mapping, MatchDetail, MatchKind, MatchTrace, MappingEntry, ResolveOptions,
    TraceRecord,
};
use tracing::{debug, info, warn};

use crate::aliases::AliasTable;
use crate::overrides::Overrides;
use crate::utils::{normalize, similarity};

/// Normalized key → first source column producing it, in source order.
struct SourceIndex<'a> {
    entries: Vec<(String, &'a str)>,
    positions: BTreeMap<String, usize>,
}

impl<'a> SourceIndex<'a> {
    fn build(columns: &'a [String]) -> Self {
        let mut entries = Vec::new();
        let mut positions = BTreeMap::new();
        for column in columns {
            let key = normalize(column);
            if positions.contains_key(&key) {
                continue;
            }
            positions.insert(key.clone(), entries.len());
            entries.push((key, column.as_str()));
        }
        Self { entries, positions }
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.positions.get(key).map(|&idx| self.entries[idx].1)
    }

    /// Highest-scoring key; the earliest source column wins ties.
    fn best_match(&self, key: &str) -> Option<(&'a str, f64)> {
        let mut best: Option<(&'a str, f64)> = None;
        for (candidate, column) in &self.entries {
            let score = similarity(key, candidate);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*column, score));
            }
        }
        best
    }
}

/// Column resolver bound to an alias dictionary and options.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    aliases: &'a AliasTable,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(aliases: &'a AliasTable, options: ResolveOptions) -> Self {
        Self { aliases, options }
    }

    /// Resolve every target column against the source columns.
    ///
    /// Always produces exactly one entry per target column, in target order.
    /// Unresolvable columns are recorded as [`MatchKind::OverrideNotFound`]
    /// or [`MatchKind::Missing`], never as errors.
    pub fn resolve(
        &self,
        source_columns: &[String],
        target_columns: &[String],
        overrides: &Overrides,
    ) -> (Mapping, MatchTrace) {
        let index = SourceIndex::build(source_columns);
        let mut decided: BTreeMap<&str, TraceRecord> = BTreeMap::new();
        let mut ignored = Vec::new();

        for (target, reference) in overrides.iter() {
            let record = resolve_override(source_columns, &index, target, reference);
            if !target_columns.iter().any(|column| column == target) {
                warn!(
                    column = %target,
                    reference = %reference,
                    "override names a column that is not in the template; ignoring"
                );
                ignored.push(IgnoredOverride {
                    target: target.to_string(),
                    reference: reference.to_string(),
                });
                continue;
            }
            log_decision(&record);
            decided.insert(target, record);
        }

        let mut records = Vec::with_capacity(target_columns.len());
        for target in target_columns {
            if let Some(record) = decided.get(target.as_str()) {
                records.push(record.clone());
                continue;
            }
            let record = self.resolve_column(&index, target);
            log_decision(&record);
            decided.insert(target.as_str(), record.clone());
            records.push(record);
        }

        let trace = MatchTrace::new(records, ignored);
        let mapping = trace.mapping();
        info!(
            mapped = mapping.resolved_count(),
            total = mapping.len(),
            "mapped {}/{} target columns",
            mapping.resolved_count(),
            mapping.len()
        );
        (mapping, trace)
    }

    fn resolve_column(&self, index: &SourceIndex<'_>, target: &str) -> TraceRecord {
        let key = normalize(target);

        if let Some(source) = index.get(&key) {
            return record(target, Some(source), MatchKind::Direct, MatchDetail::None);
        }

        if let Some(group) = self.aliases.lookup(&key)
            && let Some(source) = group
                .member_keys()
                .iter()
                .find_map(|member| index.get(member))
        {
            return record(
                target,
                Some(source),
                MatchKind::Alias,
                MatchDetail::AliasGroup(group.canonical().to_string()),
            );
        }

        match index.best_match(&key) {
            Some((source, score)) if score >= self.options.fuzzy_cutoff => record(
                target,
                Some(source),
                MatchKind::Fuzzy,
                MatchDetail::Similarity(score),
            ),
            Some((_, score)) => record(
                target,
                None,
                MatchKind::Missing,
                MatchDetail::Similarity(score),
            ),
            None => record(target, None, MatchKind::Missing, MatchDetail::None),
        }
    }
}

fn resolve_override(
    source_columns: &[String],
    index: &SourceIndex<'_>,
    target: &str,
    reference: &str,
) -> TraceRecord {
    let detail = MatchDetail::OverrideReference(reference.to_string());
    if source_columns.iter().any(|column| column == reference) {
        return record(target, Some(reference), MatchKind::Override, detail);
    }
    match index.get(&normalize(reference)) {
        Some(source) => record(target, Some(source), MatchKind::OverrideNormalized, detail),
        None => record(target, None, MatchKind::OverrideNotFound, detail),
    }
}

fn record(target: &str, source: Option<&str>, kind: MatchKind, detail: MatchDetail) -> TraceRecord {
    TraceRecord {
        entry: MappingEntry::new(target, source.map(str::to_string), kind),
        detail,
    }
}

fn log_decision(record: &TraceRecord) {
    let entry = &record.entry;
    match entry.kind() {
        MatchKind::OverrideNotFound => warn!(
            column = %entry.target(),
            detail = %record.detail.describe(),
            "override source column not found"
        ),
        kind => debug!(
            column = %entry.target(),
            source = entry.source().unwrap_or_default(),
            kind = %kind,
            detail = %record.detail.describe(),
            "resolved column"
        ),
    }
}

/// Resolve with the standard alias dictionary and the given fuzzy cutoff.
pub fn resolve(
    source_columns: &[String],
    target_columns: &[String],
    overrides: &Overrides,
    fuzzy_cutoff: f64,
) -> (Mapping, MatchTrace) {
    let aliases = AliasTable::standard();
    Resolver::new(&aliases, ResolveOptions::new().with_fuzzy_cutoff(fuzzy_cutoff)).resolve(
        source_columns,
        target_columns,
        overrides,
    )
}
