use fb_map::{Overrides, normalize, resolve, similarity};
use fb_model::MatchKind;
use proptest::prelude::*;

fn header() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 #/_-]{0,12}"
}

fn headers() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(header(), 0..8)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_ignores_ascii_case(raw in "[ -~]{0,24}") {
        prop_assert_eq!(normalize(&raw.to_ascii_uppercase()), normalize(&raw));
        prop_assert_eq!(normalize(&raw.to_ascii_lowercase()), normalize(&raw));
    }

    #[test]
    fn normalize_keeps_only_alphanumerics(raw in ".*") {
        prop_assert!(normalize(&raw).chars().all(char::is_alphanumeric));
    }

    #[test]
    fn mapping_is_total_and_ordered(
        targets in headers(),
        sources in headers(),
        cutoff in 0.0f64..=1.0,
    ) {
        let (mapping, trace) = resolve(&sources, &targets, &Overrides::new(), cutoff);
        prop_assert_eq!(mapping.len(), targets.len());
        prop_assert_eq!(trace.records().len(), targets.len());
        for (entry, target) in mapping.iter().zip(&targets) {
            prop_assert_eq!(entry.target(), target.as_str());
            prop_assert_eq!(entry.source().is_some(), !entry.kind().is_unresolved());
            if let Some(source) = entry.source() {
                prop_assert!(sources.iter().any(|column| column == source));
            }
        }
    }

    #[test]
    fn overridden_targets_keep_an_override_kind(
        targets in proptest::collection::vec(header(), 1..8),
        sources in headers(),
        reference in header(),
    ) {
        let overrides: Overrides = [(targets[0].clone(), reference)].into_iter().collect();
        let (mapping, _) = resolve(&sources, &targets, &overrides, 0.84);
        for entry in mapping.iter().filter(|entry| entry.target() == targets[0]) {
            prop_assert!(entry.kind().is_override(), "got {:?}", entry.kind());
        }
    }

    #[test]
    fn missing_entries_are_below_the_cutoff(
        targets in headers(),
        sources in headers(),
        cutoff in 0.0f64..=1.0,
    ) {
        let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), cutoff);
        for entry in mapping.iter().filter(|entry| entry.kind() == MatchKind::Missing) {
            let key = normalize(entry.target());
            for source in &sources {
                prop_assert!(similarity(&key, &normalize(source)) < cutoff);
            }
        }
    }

    #[test]
    fn duplicate_sources_point_to_first_occurrence(name in "[A-Za-z]{1,10}") {
        let sources = vec![name.to_ascii_lowercase(), name.to_ascii_uppercase()];
        let targets = vec![name.clone()];
        let (mapping, _) = resolve(&sources, &targets, &Overrides::new(), 0.84);
        let entry = &mapping.entries()[0];
        prop_assert_eq!(entry.source(), Some(sources[0].as_str()));
    }
}
