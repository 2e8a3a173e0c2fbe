//! Sidebar filter behavior.

use super::common::{ids, make_entry, sample_catalog};
use toolscout::{search, Catalog, SubsequenceMatcher};

#[test]
fn ordered_initials_match() {
    let catalog = Catalog::from_entries([make_entry(
        "cpf-generator",
        "Gerador CPF",
        "",
        "GERADORES",
    )])
    .unwrap();

    assert_eq!(search(&catalog, &SubsequenceMatcher, "gcp").len(), 1);
    assert!(search(&catalog, &SubsequenceMatcher, "pcg").is_empty());
}

#[test]
fn only_names_are_searched() {
    let catalog = sample_catalog();

    // "sha256" lives in the hash generator's description
    assert!(search(&catalog, &SubsequenceMatcher, "sha256").is_empty());
    // the id "bmi" is not in any name either
    assert!(search(&catalog, &SubsequenceMatcher, "bmi").is_empty());
}

#[test]
fn insertions_in_name_are_free() {
    let catalog = sample_catalog();
    let result = search(&catalog, &SubsequenceMatcher, "vldcnpj");
    assert_eq!(ids(&result), vec!["cnpj-validator"]);
}

#[test]
fn no_typo_tolerance_for_missing_characters() {
    let catalog = sample_catalog();
    // "x" appears in no name, so nothing can absorb it
    assert!(search(&catalog, &SubsequenceMatcher, "gxrador").is_empty());
}

#[test]
fn matches_group_by_category() {
    let catalog = sample_catalog();
    let result = search(&catalog, &SubsequenceMatcher, "cpf");

    let labels: Vec<&str> = result.labels().collect();
    assert_eq!(labels, vec!["GERADORES", "VALIDADORES"]);
}
