//! Laws of the catalog walk, for any catalog and any matcher.

use super::common::catalog_labels;
use proptest::prelude::*;
use toolscout::{search, Catalog, CatalogEntry, Matcher, Query, SubsequenceMatcher, TieredMatcher};

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fA-F]{1,8}").unwrap()
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    let entry = (
        prop::collection::vec(word(), 1..4).prop_map(|w| w.join(" ")),
        prop::collection::vec(word(), 0..5).prop_map(|w| w.join(" ")),
        prop::sample::select(vec!["GERADORES", "VALIDADORES", "CONVERSORES", "CONSULTAS"]),
    );
    prop::collection::vec(entry, 0..16).prop_map(|entries| {
        Catalog::from_entries(entries.into_iter().enumerate().map(
            |(i, (name, description, category))| {
                CatalogEntry::new(format!("tool-{i}"), name, description, category)
            },
        ))
        .unwrap()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fA-F ]{0,7}").unwrap()
}

/// Exactly the entries the matcher accepts, in catalog order, grouped.
fn assert_sound_and_complete<M: Matcher>(
    catalog: &Catalog,
    matcher: &M,
    raw_query: &str,
) -> Result<(), TestCaseError> {
    let result = search(catalog, matcher, raw_query);
    let query = Query::parse(raw_query);

    let expected: Vec<&str> = catalog
        .entries()
        .filter(|e| query.is_empty() || matcher.matches(e.search_text(), &query))
        .map(|e| e.id())
        .collect();
    let actual: Vec<&str> = result.entries().map(|e| e.id()).collect();
    prop_assert_eq!(actual, expected);

    for group in result.groups() {
        prop_assert!(!group.entries.is_empty(), "empty group {}", group.label);
        prop_assert!(group.entries.iter().all(|e| e.category() == group.label));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_empty_query_returns_full_catalog(catalog in catalog_strategy(), pad in " {0,3}") {
        for result in [
            search(&catalog, &TieredMatcher::default(), &pad),
            search(&catalog, &SubsequenceMatcher, &pad),
        ] {
            prop_assert_eq!(result.len(), catalog.len());
            prop_assert_eq!(result.labels().collect::<Vec<_>>(), catalog_labels(&catalog));
        }
    }

    #[test]
    fn prop_overlay_sound_and_complete(catalog in catalog_strategy(), query in query_strategy()) {
        assert_sound_and_complete(&catalog, &TieredMatcher::default(), &query)?;
    }

    #[test]
    fn prop_sidebar_sound_and_complete(catalog in catalog_strategy(), query in query_strategy()) {
        assert_sound_and_complete(&catalog, &SubsequenceMatcher, &query)?;
    }

    #[test]
    fn prop_idempotent(catalog in catalog_strategy(), query in query_strategy()) {
        let matcher = TieredMatcher::default();
        let first = serde_json::to_string(&search(&catalog, &matcher, &query)).unwrap();
        let second = serde_json::to_string(&search(&catalog, &matcher, &query)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_group_order_follows_catalog(catalog in catalog_strategy(), query in query_strategy()) {
        let result = search(&catalog, &SubsequenceMatcher, &query);
        let declared = catalog_labels(&catalog);
        let positions: Vec<usize> = result
            .labels()
            .filter_map(|label| declared.iter().position(|d| *d == label))
            .collect();
        prop_assert_eq!(positions.len(), result.groups().len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_exact_substring_of_name_always_matches(
        catalog in catalog_strategy(),
        start in 0usize..6,
        len in 1usize..4,
    ) {
        let matcher = TieredMatcher::default();
        for entry in catalog.entries() {
            let slice: String = entry.name().chars().skip(start).take(len).collect();
            if slice.trim().is_empty() {
                continue;
            }
            let result = search(&catalog, &matcher, &slice);
            prop_assert!(result.contains(entry.id()), "{:?} should find {}", slice, entry.id());
        }
    }
}
