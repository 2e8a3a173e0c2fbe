// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match predicates: does this entry satisfy this query?
//!
//! Two strategies share one trait so the catalog walk lives in exactly one
//! place ([`crate::search`]):
//!
//! | Matcher                | Fields                 | Tolerance                          |
//! |------------------------|------------------------|------------------------------------|
//! | [`TieredMatcher`]      | name, description, id  | substring → all words → fuzzy      |
//! | [`SubsequenceMatcher`] | name only              | ordered, non-contiguous characters |
//!
//! Both see the entry's precomputed [`SearchText`] and an already-normalized
//! [`Query`], so neither allocates per entry for case folding.

mod subsequence;
mod tiered;

pub use subsequence::SubsequenceMatcher;
pub use tiered::{Tier, TieredMatcher};

use crate::types::{Query, SearchText};

/// A stateless predicate over `(entry text, query)`.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait Matcher: Send + Sync {
    fn matches(&self, text: &SearchText, query: &Query) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&SearchText, &Query) -> bool + Send + Sync,
{
    fn matches(&self, text: &SearchText, query: &Query) -> bool {
        self(text, query)
    }
}
