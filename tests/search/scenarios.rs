//! End-to-end scenarios for the overlay matcher.
//!
//! One test per tier, plus the zero-match case. Each builds the smallest
//! catalog that shows the behavior.

use super::common::{cpf_catalog, ids, labels, make_entry};
use toolscout::{search, Catalog, MatchConfig, Query, Tier, TieredMatcher};

#[test]
fn exact_tier_returns_both_cpf_tools_in_category_order() {
    let catalog = cpf_catalog();
    let result = search(&catalog, &TieredMatcher::default(), "cpf");

    assert_eq!(labels(&result), vec!["GERADORES", "VALIDADORES"]);
    assert_eq!(ids(&result), vec!["cpf-generator", "cpf-validator"]);
    assert_eq!(result.group("GERADORES").unwrap().entries.len(), 1);
    assert_eq!(result.group("VALIDADORES").unwrap().entries.len(), 1);
}

#[test]
fn query_is_normalized_before_matching() {
    let catalog = cpf_catalog();
    let result = search(&catalog, &TieredMatcher::default(), "   CPF\t");
    assert_eq!(result.len(), 2);
}

#[test]
fn whole_word_tier_matches_split_words() {
    let catalog = Catalog::from_entries([make_entry(
        "hash-generator",
        "Gerador de Hash",
        "Gera hashes MD5, SHA256",
        "GERADORES",
    )])
    .unwrap();
    let matcher = TieredMatcher::default();

    // Not a contiguous substring anywhere
    let entry = catalog.get("hash-generator").unwrap();
    assert!(!entry.search_text().name.contains("gerador hash"));

    let result = search(&catalog, &matcher, "gerador hash");
    assert_eq!(ids(&result), vec!["hash-generator"]);
    assert_eq!(
        matcher.match_tier(entry.search_text(), &Query::parse("gerador hash")),
        Some(Tier::AllWords)
    );
}

#[test]
fn fuzzy_tier_matches_transposed_letters() {
    let catalog = Catalog::from_entries([make_entry(
        "compound-interest",
        "Calculadora de Juros Compostos",
        "",
        "CALCULADORAS",
    )])
    .unwrap();
    let matcher = TieredMatcher::default();

    let result = search(&catalog, &matcher, "compsotos");
    assert_eq!(ids(&result), vec!["compound-interest"]);

    let entry = catalog.get("compound-interest").unwrap();
    assert_eq!(
        matcher.match_tier(entry.search_text(), &Query::parse("compsotos")),
        Some(Tier::Fuzzy)
    );
}

#[test]
fn fuzzy_tier_accepts_prefix_of_a_word() {
    let catalog = Catalog::from_entries([make_entry(
        "unit-converter",
        "Conversor de Unidades",
        "Comprimento, massa e volume",
        "CONVERSORES",
    )])
    .unwrap();

    // "compr" is a prefix of "comprimento," and also a substring; either way it matches
    let result = search(&catalog, &TieredMatcher::default(), "compr");
    assert_eq!(result.len(), 1);
}

#[test]
fn zero_matches_yield_no_categories_at_all() {
    let catalog = cpf_catalog();
    let result = search(&catalog, &TieredMatcher::default(), "zzzzzz");

    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
    assert!(result.groups().is_empty());
    assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
}

#[test]
fn configured_threshold_changes_fuzzy_acceptance() {
    let catalog = Catalog::from_entries([make_entry(
        "compound-interest",
        "Calculadora de Juros Compostos",
        "",
        "CALCULADORAS",
    )])
    .unwrap();
    let strict = TieredMatcher::new(
        MatchConfig::from_json_str(r#"{"similarity_threshold": 0.8}"#).unwrap(),
    );

    // 7/9 ≈ 0.78 clears the default 0.6 but not 0.8
    assert!(search(&catalog, &strict, "compsotos").is_empty());
    assert_eq!(search(&catalog, &TieredMatcher::default(), "compsotos").len(), 1);
}
