// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier overlay matcher: substring → all words → fuzzy.
//!
//! Tier 1 (exact) asks whether the query appears verbatim in the name, the
//! description or the id. "cpf" finds "Gerador CPF". Tier 2 (all words) splits
//! the query and wants every meaningful word somewhere in the entry, so
//! "gerador hash" finds "Gerador de Hash". Tier 3 (fuzzy) compares the query
//! against each word of the entry, so "compsotos" finds "Compostos".
//!
//! The tiers run in order and the first success wins; a fuzzy comparison is
//! never paid for an entry the substring check already accepted.
//!
//! Tier 3 is gated on query length. With one or two characters almost every
//! word is "similar", and the overlay would show the whole catalog back.

use super::Matcher;
use crate::config::MatchConfig;
use crate::fuzzy::is_similar;
use crate::types::{Query, SearchText};
use crate::utils::char_len;
use std::fmt;

/// Which tier accepted an entry. Ordered from strictest to most permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Query is a substring of name, description or id.
    Exact,
    /// Every query word of useful length appears in the entry.
    AllWords,
    /// Some entry word starts with, contains, or closely resembles the query.
    Fuzzy,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Exact => "exact",
            Tier::AllWords => "all-words",
            Tier::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlay matcher. Cheap to copy; holds nothing but its thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TieredMatcher {
    config: MatchConfig,
}

impl TieredMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The first tier that accepts the entry, if any.
    pub fn match_tier(&self, text: &SearchText, query: &Query) -> Option<Tier> {
        if Self::exact(text, query) {
            Some(Tier::Exact)
        } else if self.all_words(text, query) {
            Some(Tier::AllWords)
        } else if self.fuzzy(text, query) {
            Some(Tier::Fuzzy)
        } else {
            None
        }
    }

    fn exact(text: &SearchText, query: &Query) -> bool {
        let q = query.as_str();
        text.name.contains(q) || text.description.contains(q) || text.id.contains(q)
    }

    /// Fails closed when no query word is long enough to count.
    fn all_words(&self, text: &SearchText, query: &Query) -> bool {
        let min_len = self.config.min_query_word_len;
        let mut words = query.words().filter(|w| char_len(w) >= min_len).peekable();

        if words.peek().is_none() {
            return false;
        }
        words.all(|w| text.combined.contains(w))
    }

    fn fuzzy(&self, text: &SearchText, query: &Query) -> bool {
        if query.char_len() < self.config.min_fuzzy_query_len {
            return false;
        }

        let q = query.as_str();
        let threshold = self.config.similarity_threshold;
        text.words()
            .filter(|w| char_len(w) >= self.config.min_fuzzy_word_len)
            .any(|w| w.starts_with(q) || w.contains(q) || is_similar(w, q, threshold))
    }
}

impl Matcher for TieredMatcher {
    fn matches(&self, text: &SearchText, query: &Query) -> bool {
        match self.match_tier(text, query) {
            Some(tier) => {
                tracing::trace!(id = %text.id, %tier, "tier accepted entry");
                true
            }
            None => false,
        }
    }
}
