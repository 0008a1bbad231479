//! The import run: read both sheets, resolve the mapping, write the output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use fb_ingest::{read_headers, read_sheet};
use fb_map::{AliasTable, Overrides, Resolver, load_overrides, save_mapping};
use fb_model::{MatchKind, ResolveOptions};
use fb_report::{MatchReport, build_report, populate, write_workbook};
use tracing::{info, info_span};

/// Exit status when `--strict` finds unmapped columns.
pub const STRICT_FAILURE_EXIT_CODE: i32 = 2;

/// Everything one run needs, independent of how it was requested.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub atf: PathBuf,
    pub atf_sheet: Option<String>,
    pub fastbound: PathBuf,
    pub fastbound_sheet: Option<String>,
    pub out: PathBuf,
    pub overrides: Option<PathBuf>,
    pub save_map: Option<PathBuf>,
    pub options: ResolveOptions,
    pub strict: bool,
}

#[derive(Debug)]
pub struct ImportResult {
    pub output: PathBuf,
    pub saved_map: Option<PathBuf>,
    pub source_rows: usize,
    pub report: MatchReport,
    pub counts: BTreeMap<MatchKind, usize>,
    pub strict: bool,
}

impl ImportResult {
    pub fn target_columns(&self) -> usize {
        self.report.rows.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.report.unresolved_count()
    }

    /// True when strict mode was requested and columns remain unmapped.
    pub fn strict_failure(&self) -> bool {
        self.strict && !self.report.is_complete()
    }

    pub fn exit_code(&self) -> i32 {
        if self.strict_failure() {
            STRICT_FAILURE_EXIT_CODE
        } else {
            0
        }
    }
}

pub fn run_import(request: &ImportRequest) -> Result<ImportResult> {
    let span = info_span!("import", atf = %request.atf.display(), out = %request.out.display());
    let _guard = span.enter();

    ensure_exists(&request.atf, "ATF record")?;
    ensure_exists(&request.fastbound, "FastBound template")?;

    let source = read_sheet(&request.atf, request.atf_sheet.as_deref())
        .with_context(|| format!("read ATF records from {}", request.atf.display()))?;
    let targets = read_headers(&request.fastbound, request.fastbound_sheet.as_deref())
        .with_context(|| format!("read FastBound layout from {}", request.fastbound.display()))?;
    info!(
        atf_columns = source.headers.len(),
        atf_rows = source.row_count(),
        fastbound_columns = targets.len(),
        "loaded sheets"
    );

    let overrides = match &request.overrides {
        Some(path) => load_overrides(path)
            .with_context(|| format!("load mapping overrides from {}", path.display()))?,
        None => Overrides::new(),
    };

    let aliases = AliasTable::standard();
    let resolver = Resolver::new(&aliases, request.options);
    let (mapping, trace) = resolver.resolve(&source.headers, &targets, &overrides);

    let populated = populate(&mapping, &source);
    let report = build_report(&trace);
    write_workbook(&request.out, &populated, &report)
        .with_context(|| format!("write output workbook {}", request.out.display()))?;

    if let Some(path) = &request.save_map {
        save_mapping(path, &mapping)
            .with_context(|| format!("save resolved mapping to {}", path.display()))?;
        info!(path = %path.display(), "saved resolved mapping");
    }

    Ok(ImportResult {
        output: request.out.clone(),
        saved_map: request.save_map.clone(),
        source_rows: source.row_count(),
        counts: trace.count_by_kind(),
        report,
        strict: request.strict,
    })
}

fn ensure_exists(path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        bail!("{label} not found: {}", path.display());
    }
    Ok(())
}
