// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-surface query state and the shell's UI state.
//!
//! A [`SearchSession`] is what one search surface owns: the query as typed,
//! the matcher that surface uses, and the result of the latest recompute. The
//! catalog is borrowed, never copied, so an overlay and a sidebar can search
//! the same catalog side by side.
//!
//! [`ShellState`] carries favorites and category expansion. It is plain data
//! passed by reference to whoever needs it, and never touches matching.

use crate::config::MatchConfig;
use crate::matcher::{Matcher, SubsequenceMatcher, TieredMatcher};
use crate::search::search_query;
use crate::types::{Catalog, CatalogEntry, MatchResult, Query};
use std::collections::BTreeSet;

/// The two places a query can be typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Surface {
    /// Full-screen command-style search: tiered matcher over all fields.
    #[default]
    Overlay,
    /// Incremental sidebar filter: subsequence matcher over names.
    Sidebar,
}

impl Surface {
    /// The matching strategy this surface injects.
    pub fn matcher(self, config: MatchConfig) -> Box<dyn Matcher> {
        match self {
            Surface::Overlay => Box::new(TieredMatcher::new(config)),
            Surface::Sidebar => Box::new(SubsequenceMatcher),
        }
    }
}

/// What the user typed, and its normalized form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    raw: String,
    query: Query,
}

impl QueryState {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let query = Query::parse(&raw);
        Self { raw, query }
    }

    /// Exactly as typed, for echoing back into the input box.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}

/// One surface's live search over a shared catalog.
pub struct SearchSession<'c> {
    catalog: &'c Catalog,
    surface: Surface,
    matcher: Box<dyn Matcher>,
    state: QueryState,
    result: MatchResult<'c>,
}

impl<'c> SearchSession<'c> {
    pub fn new(catalog: &'c Catalog, surface: Surface, config: MatchConfig) -> Self {
        Self::with_matcher(catalog, surface, surface.matcher(config))
    }

    /// Start a session with a caller-supplied matching strategy.
    pub fn with_matcher(catalog: &'c Catalog, surface: Surface, matcher: Box<dyn Matcher>) -> Self {
        let state = QueryState::default();
        let result = search_query(catalog, matcher.as_ref(), state.query());
        Self {
            catalog,
            surface,
            matcher,
            state,
            result,
        }
    }

    /// Replace the query and recompute from scratch.
    pub fn set_query(&mut self, raw: impl Into<String>) -> &MatchResult<'c> {
        self.state = QueryState::new(raw);
        self.result = search_query(self.catalog, self.matcher.as_ref(), self.state.query());
        &self.result
    }

    pub fn clear(&mut self) -> &MatchResult<'c> {
        self.set_query(String::new())
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn result(&self) -> &MatchResult<'c> {
        &self.result
    }

    /// A non-empty query found nothing.
    pub fn is_no_results(&self) -> bool {
        self.state.is_active() && self.result.is_empty()
    }

    /// The id of an activated entry, if it is currently on screen.
    ///
    /// Routing and closing the surface are the host's job.
    pub fn select(&self, id: &str) -> Option<&'c str> {
        self.result.get(id).map(CatalogEntry::id)
    }
}

/// Favorites and expanded categories, owned by the host shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    favorites: BTreeSet<String>,
    expanded: BTreeSet<String>,
}

impl ShellState {
    /// Flip an entry's favorite flag. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited entries in catalog order. Ids no longer in the catalog are skipped.
    pub fn favorites<'c>(&self, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
        catalog
            .entries()
            .filter(|entry| self.favorites.contains(entry.id()))
            .collect()
    }

    /// Flip a category's expansion. Returns the new state.
    pub fn toggle_category(&mut self, label: &str) -> bool {
        if self.expanded.remove(label) {
            false
        } else {
            self.expanded.insert(label.to_string());
            true
        }
    }

    /// Expanded explicitly, or because the active query matched inside it.
    pub fn is_expanded(&self, label: &str, session: &SearchSession<'_>) -> bool {
        self.expanded.contains(label)
            || (session.state().is_active() && session.result().group(label).is_some())
    }
}
