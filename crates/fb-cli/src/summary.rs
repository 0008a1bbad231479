use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use fb_cli::import::ImportResult;
use fb_model::MatchKind;
use fb_report::{MAPPING_REPORT_HEADERS, ReportRow};

pub fn print_summary(result: &ImportResult) {
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.saved_map {
        println!("Saved mapping: {}", path.display());
    }
    println!("ATF rows: {}", result.source_rows);

    let mut table = Table::new();
    table.set_header(
        MAPPING_REPORT_HEADERS
            .iter()
            .copied()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_mapping_table_style(&mut table);
    for row in &result.report.rows {
        table.add_row(mapping_row(row));
    }
    println!("{table}");

    print_counts(result);

    if !result.report.config_issues.is_empty() || !result.report.ignored_overrides.is_empty() {
        eprintln!("Override issues:");
        for issue in &result.report.config_issues {
            eprintln!("- {}", issue.message());
        }
        for ignored in &result.report.ignored_overrides {
            eprintln!(
                "- override for '{}' ignored: not a FastBound column (reference '{}')",
                ignored.target, ignored.reference
            );
        }
    }
}

fn print_counts(result: &ImportResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Match Type"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in &result.counts {
        table.add_row(vec![kind_cell(*kind), Cell::new(count)]);
    }
    let unresolved = result.unresolved_count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} mapped / {} unmapped",
            result.target_columns() - unresolved,
            unresolved
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn mapping_row(row: &ReportRow) -> Vec<Cell> {
    let source = if row.source.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&row.source)
    };
    let detail = if row.detail.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&row.detail)
    };
    vec![
        Cell::new(&row.target)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        source,
        kind_cell(row.kind),
        detail,
    ]
}

fn kind_cell(kind: MatchKind) -> Cell {
    let cell = Cell::new(kind.label());
    match kind {
        MatchKind::Override | MatchKind::OverrideNormalized | MatchKind::Direct => {
            cell.fg(Color::Green)
        }
        MatchKind::Alias => cell.fg(Color::Cyan),
        MatchKind::Fuzzy => cell.fg(Color::Yellow),
        MatchKind::OverrideNotFound | MatchKind::Missing => {
            cell.fg(Color::Red).add_attribute(Attribute::Bold)
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_mapping_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::LowerBoundary(Width::Fixed(18)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
