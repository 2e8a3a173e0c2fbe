//! Same catalog, same query, same bytes out.

use super::common::{load_bundled_catalog, sample_catalog};
use toolscout::{search, MatchConfig, SearchSession, SubsequenceMatcher, Surface, TieredMatcher};

const QUERIES: &[&str] = &["", "cpf", "gerador hash", "compsotos", "zzzzzz", "ge", "c"];

#[test]
fn repeated_overlay_search_is_byte_identical() {
    let catalog = load_bundled_catalog();
    let matcher = TieredMatcher::default();

    for query in QUERIES {
        let first = serde_json::to_string(&search(&catalog, &matcher, query)).unwrap();
        for run in 0..5 {
            let again = serde_json::to_string(&search(&catalog, &matcher, query)).unwrap();
            assert_eq!(first, again, "Run {} of {:?} differs", run, query);
        }
    }
}

#[test]
fn repeated_sidebar_search_is_byte_identical() {
    let catalog = sample_catalog();

    for query in QUERIES {
        let first = serde_json::to_string(&search(&catalog, &SubsequenceMatcher, query)).unwrap();
        let again = serde_json::to_string(&search(&catalog, &SubsequenceMatcher, query)).unwrap();
        assert_eq!(first, again, "Query {:?} differs", query);
    }
}

#[test]
fn session_history_does_not_leak_into_results() {
    let catalog = load_bundled_catalog();
    let mut typed = SearchSession::new(&catalog, Surface::Overlay, MatchConfig::default());

    // Type "compsotos" one keystroke at a time, then compare with a fresh search
    for end in 1..="compsotos".len() {
        typed.set_query(&"compsotos"[..end]);
    }
    let fresh = search(&catalog, &TieredMatcher::default(), "compsotos");
    assert_eq!(typed.result(), &fresh);
}
