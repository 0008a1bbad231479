use fb_map::{AliasGroup, AliasTable, Overrides, Resolver, resolve};
use fb_model::{MappingEntry, MatchDetail, MatchKind, ResolveOptions};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn kinds(entries: &[MappingEntry]) -> Vec<(&str, Option<&str>, MatchKind)> {
    entries
        .iter()
        .map(|entry| (entry.target(), entry.source(), entry.kind()))
        .collect()
}

#[test]
fn aliases_and_missing_columns() {
    let targets = columns(&["Manufacturer", "SKU", "Unmapped Field"]);
    let sources = columns(&["Maker", "Item#", "Other"]);

    let (mapping, trace) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![
            ("Manufacturer", Some("Maker"), MatchKind::Alias),
            ("SKU", Some("Item#"), MatchKind::Alias),
            ("Unmapped Field", None, MatchKind::Missing),
        ]
    );
    assert_eq!(
        trace.records()[0].detail,
        MatchDetail::AliasGroup("manufacturer".to_string())
    );
}

#[test]
fn override_beats_alias() {
    let targets = columns(&["Manufacturer"]);
    let sources = columns(&["Brand", "Maker"]);
    let overrides: Overrides = [("Manufacturer", "Brand")].into_iter().collect();

    let (mapping, _) = resolve(&sources, &targets, &overrides, 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("Manufacturer", Some("Brand"), MatchKind::Override)]
    );
}

#[test]
fn override_not_found_is_not_retried() {
    let targets = columns(&["Model", "Caliber"]);
    let sources = columns(&["Model", "Caliber"]);
    let overrides: Overrides = [("Model", "Model Name")].into_iter().collect();

    let (mapping, trace) = resolve(&sources, &targets, &overrides, 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![
            ("Model", None, MatchKind::OverrideNotFound),
            ("Caliber", Some("Caliber"), MatchKind::Direct),
        ]
    );
    assert_eq!(
        trace.records()[0].detail,
        MatchDetail::OverrideReference("Model Name".to_string())
    );
    assert!(mapping.has_unresolved());
}

#[test]
fn override_reference_resolved_through_normalization() {
    let targets = columns(&["Serial Number"]);
    let sources = columns(&["Serial", "SERIAL"]);
    let overrides: Overrides = [("Serial Number", "serial!")].into_iter().collect();

    let (mapping, _) = resolve(&sources, &targets, &overrides, 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("Serial Number", Some("Serial"), MatchKind::OverrideNormalized)]
    );
}

#[test]
fn override_literal_reference_wins_over_first_normalized_duplicate() {
    let targets = columns(&["Serial Number"]);
    let sources = columns(&["Serial", "SERIAL"]);
    let overrides: Overrides = [("Serial Number", "SERIAL")].into_iter().collect();

    let (mapping, _) = resolve(&sources, &targets, &overrides, 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("Serial Number", Some("SERIAL"), MatchKind::Override)]
    );
}

#[test]
fn direct_match_beats_alias() {
    let targets = columns(&["Make"]);
    let sources = columns(&["Manufacturer", "make"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("Make", Some("make"), MatchKind::Direct)]
    );
}

#[test]
fn duplicate_sources_resolve_to_first_occurrence() {
    let targets = columns(&["Serial", "Model"]);
    let sources = columns(&["serial", "SERIAL", "Model", "MODEL"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![
            ("Serial", Some("serial"), MatchKind::Direct),
            ("Model", Some("Model"), MatchKind::Direct),
        ]
    );
}

#[test]
fn fuzzy_match_at_cutoff_boundary() {
    // "serialnum" vs "serialnumber": 2 * 9 / 21 = 0.857
    let targets = columns(&["Serial Num"]);
    let sources = columns(&["Serial Number"]);

    let (accepted, trace) = resolve(&sources, &targets, &Overrides::new(), 0.84);
    assert_eq!(
        kinds(accepted.entries()),
        vec![("Serial Num", Some("Serial Number"), MatchKind::Fuzzy)]
    );
    let MatchDetail::Similarity(score) = trace.records()[0].detail else {
        panic!("expected similarity detail");
    };
    assert!((score - 18.0 / 21.0).abs() < 1e-9);

    let (rejected, trace) = resolve(&sources, &targets, &Overrides::new(), 0.86);
    assert_eq!(
        kinds(rejected.entries()),
        vec![("Serial Num", None, MatchKind::Missing)]
    );
    assert!(matches!(trace.records()[0].detail, MatchDetail::Similarity(_)));
}

#[test]
fn fuzzy_cutoff_is_inclusive() {
    let targets = columns(&["abcd"]);
    let sources = columns(&["abce"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.75);

    assert_eq!(mapping.entries()[0].kind(), MatchKind::Fuzzy);
}

#[test]
fn fuzzy_ties_go_to_earliest_source() {
    let targets = columns(&["abcd"]);
    let sources = columns(&["abcf", "abce"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.7);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("abcd", Some("abcf"), MatchKind::Fuzzy)]
    );
}

#[test]
fn only_first_alias_group_is_consulted() {
    // "zip" belongs to the acquisition group first; the disposition group's
    // "customerzip" is never considered.
    let targets = columns(&["ZIP"]);
    let sources = columns(&["Customer Zip"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![("ZIP", None, MatchKind::Missing)]
    );
}

#[test]
fn override_for_unknown_target_is_ignored() {
    let targets = columns(&["Model"]);
    let sources = columns(&["Model", "Notes"]);
    let overrides: Overrides = [("Remarks", "Notes")].into_iter().collect();

    let (mapping, trace) = resolve(&sources, &targets, &overrides, 0.84);

    assert_eq!(mapping.len(), 1);
    assert_eq!(trace.ignored_overrides().len(), 1);
    assert_eq!(trace.ignored_overrides()[0].target, "Remarks");
}

#[test]
fn repeated_template_columns_each_get_an_entry() {
    let targets = columns(&["Model", "Notes", "Model"]);
    let sources = columns(&["Model"]);

    let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(
        kinds(mapping.entries()),
        vec![
            ("Model", Some("Model"), MatchKind::Direct),
            ("Notes", None, MatchKind::Missing),
            ("Model", Some("Model"), MatchKind::Direct),
        ]
    );
}

#[test]
fn no_sources_means_everything_missing() {
    let targets = columns(&["Model", "Caliber"]);

    let (mapping, trace) = resolve(&[], &targets, &Overrides::new(), 0.84);

    assert_eq!(mapping.resolved_count(), 0);
    assert!(
        trace
            .records()
            .iter()
            .all(|record| record.detail == MatchDetail::None)
    );
}

#[test]
fn custom_alias_table() {
    let aliases = AliasTable::new(vec![AliasGroup::new(
        "stocknumber",
        vec!["stock#".to_string(), "stockno".to_string()],
    )]);
    let resolver = Resolver::new(&aliases, ResolveOptions::default());
    let targets = columns(&["Stock Number", "Manufacturer"]);
    let sources = columns(&["Stock No", "Maker"]);

    let (mapping, _) = resolver.resolve(&sources, &targets, &Overrides::new());

    assert_eq!(
        kinds(mapping.entries()),
        vec![
            ("Stock Number", Some("Stock No"), MatchKind::Alias),
            ("Manufacturer", None, MatchKind::Missing),
        ]
    );
}

#[test]
fn counts_by_kind() {
    let targets = columns(&["Manufacturer", "Model", "Serial Num", "Importer"]);
    let sources = columns(&["Maker", "Model", "Serial Number"]);

    let (_, trace) = resolve(&sources, &targets, &Overrides::new(), 0.84);

    assert_eq!(trace.count_of(MatchKind::Alias), 1);
    assert_eq!(trace.count_of(MatchKind::Direct), 1);
    assert_eq!(trace.count_of(MatchKind::Fuzzy), 1);
    assert_eq!(trace.count_of(MatchKind::Missing), 1);
}
