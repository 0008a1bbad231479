//! Mapping report built from a resolution trace.

use fb_map::normalize;
use fb_model::{IgnoredOverride, MatchDetail, MatchKind, MatchTrace};

use crate::guidance::guidance_for_key;

/// Column headers of the mapping report sheet.
pub const MAPPING_REPORT_HEADERS: [&str; 4] =
    ["FastBound Column", "ATF Source", "Match Type", "Detail"];

/// Column headers of the guidance sheet.
pub const GUIDANCE_HEADERS: [&str; 2] = ["Missing FastBound Column", "How to Obtain"];

/// One line of the mapping report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub target: String,
    /// Resolved source column, empty when unresolved.
    pub source: String,
    pub kind: MatchKind,
    pub detail: String,
}

impl ReportRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.target.as_str(),
            self.source.as_str(),
            self.kind.label(),
            self.detail.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidanceRow {
    pub target: String,
    pub guidance: String,
}

/// An override whose reference named no source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub target: String,
    pub reference: String,
}

impl ConfigIssue {
    pub fn message(&self) -> String {
        format!(
            "override for '{}' references '{}', which is not an ATF column",
            self.target, self.reference
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    pub rows: Vec<ReportRow>,
    /// One row per MISSING target column.
    pub guidance: Vec<GuidanceRow>,
    pub config_issues: Vec<ConfigIssue>,
    pub ignored_overrides: Vec<IgnoredOverride>,
}

impl MatchReport {
    /// Number of target columns left without a source.
    pub fn unresolved_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.kind.is_unresolved())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved_count() == 0
    }
}

/// Build the report for a trace, one row per target column in order.
pub fn build_report(trace: &MatchTrace) -> MatchReport {
    let mut report = MatchReport {
        ignored_overrides: trace.ignored_overrides().to_vec(),
        ..MatchReport::default()
    };

    for record in trace.records() {
        let entry = &record.entry;
        let target = entry.target().to_string();
        report.rows.push(ReportRow {
            target: target.clone(),
            source: entry.source().unwrap_or_default().to_string(),
            kind: entry.kind(),
            detail: record.detail.describe(),
        });

        match entry.kind() {
            MatchKind::Missing => report.guidance.push(GuidanceRow {
                guidance: guidance_for_key(&normalize(&target)),
                target,
            }),
            MatchKind::OverrideNotFound => report.config_issues.push(ConfigIssue {
                reference: match &record.detail {
                    MatchDetail::OverrideReference(reference) => reference.clone(),
                    _ => String::new(),
                },
                target,
            }),
            _ => {}
        }
    }
    report
}
