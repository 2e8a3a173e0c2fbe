// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog walk: apply a matcher, regroup by category.
//!
//! Every surface funnels through [`search`]. Categories come out in catalog
//! order, entries in catalog order within their category, and categories with
//! no survivors are left out entirely. There is no score: which tier accepted
//! an entry never reorders anything.
//!
//! Each call is a fresh, complete recompute. Nothing is cached between
//! keystrokes, so the newest query alone determines the newest result.

use crate::matcher::Matcher;
use crate::types::{Catalog, CatalogEntry, CategoryMatches, MatchResult, Query};

/// Search the catalog with a raw, un-normalized query string.
pub fn search<'c, M>(catalog: &'c Catalog, matcher: &M, raw_query: &str) -> MatchResult<'c>
where
    M: Matcher + ?Sized,
{
    search_query(catalog, matcher, &Query::parse(raw_query))
}

/// Search with an already-parsed query.
///
/// An empty query short-circuits to the whole catalog without consulting the
/// matcher, so both surfaces agree on what "no filter" means.
pub fn search_query<'c, M>(catalog: &'c Catalog, matcher: &M, query: &Query) -> MatchResult<'c>
where
    M: Matcher + ?Sized,
{
    if query.is_empty() {
        return all_entries(catalog);
    }

    let groups: Vec<CategoryMatches<'c>> = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let entries: Vec<&CatalogEntry> = category
                .entries()
                .iter()
                .filter(|entry| matcher.matches(entry.search_text(), query))
                .collect();
            (!entries.is_empty()).then_some(CategoryMatches {
                label: category.label(),
                entries,
            })
        })
        .collect();

    let result = MatchResult::from_groups(groups);
    tracing::debug!(
        query = query.as_str(),
        matched = result.len(),
        categories = result.groups().len(),
        "catalog search"
    );
    result
}

/// The whole catalog as a result, grouped and ordered as declared.
pub fn all_entries(catalog: &Catalog) -> MatchResult<'_> {
    let groups = catalog
        .categories()
        .iter()
        .map(|category| CategoryMatches {
            label: category.label(),
            entries: category.entries().iter().collect(),
        })
        .collect();
    MatchResult::from_groups(groups)
}
