//! Tier ordering and short-query gating.

use super::common::{make_entry, sample_catalog};
use toolscout::{search, similarity, Catalog, Query, Tier, TieredMatcher};

#[test]
fn fuzzy_only_candidate_rejected_for_short_query() {
    // "ab" vs "acb": one deletion away, similarity 2/3 > 0.6
    assert!(similarity("acb", "ab") > 0.6);

    let catalog = Catalog::from_entries([make_entry("zz", "acb", "", "X")]).unwrap();
    assert!(search(&catalog, &TieredMatcher::default(), "ab").is_empty());
}

#[test]
fn same_candidate_accepted_once_query_is_long_enough() {
    // "acbd" vs "abd": similarity 3/4
    let catalog = Catalog::from_entries([make_entry("zz", "acbd", "", "X")]).unwrap();
    assert_eq!(search(&catalog, &TieredMatcher::default(), "abd").len(), 1);
}

#[test]
fn short_query_still_gets_exact_matches() {
    let catalog = sample_catalog();
    let result = search(&catalog, &TieredMatcher::default(), "uu");
    assert_eq!(result.entries().map(|e| e.id()).collect::<Vec<_>>(), vec!["uuid-generator"]);
}

#[test]
fn first_accepting_tier_is_reported() {
    let matcher = TieredMatcher::default();
    let catalog = sample_catalog();
    let hash = catalog.get("hash-generator").unwrap().search_text();

    assert_eq!(matcher.match_tier(hash, &Query::parse("hash")), Some(Tier::Exact));
    assert_eq!(matcher.match_tier(hash, &Query::parse("hash md5")), Some(Tier::AllWords));
    assert_eq!(matcher.match_tier(hash, &Query::parse("hahs")), Some(Tier::Fuzzy));
    assert_eq!(matcher.match_tier(hash, &Query::parse("qwerty")), None);
}

#[test]
fn whole_word_tier_never_matches_vacuously() {
    // Only one-letter words: tier 2 has nothing to check and must fail,
    // and no catalog word resembles "q w" closely enough for tier 3
    let catalog = sample_catalog();
    let result = search(&catalog, &TieredMatcher::default(), "q w");
    assert!(result.is_empty());
}

#[test]
fn tier_does_not_reorder_results() {
    // The fuzzy hit comes first in the catalog, the exact hit second.
    let catalog = Catalog::from_entries([
        make_entry("fuzzy-hit", "Gerador Compostos", "", "X"),
        make_entry("exact-hit", "Compsotos Exatos", "", "X"),
    ])
    .unwrap();

    let result = search(&catalog, &TieredMatcher::default(), "compsotos");
    let ids: Vec<&str> = result.entries().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["fuzzy-hit", "exact-hit"]);
}
