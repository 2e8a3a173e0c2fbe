// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sidebar filter: ordered characters, name only.
//!
//! Walk the name once with a cursor into the query; each name character equal
//! to the pending query character advances the cursor. The entry matches when
//! the cursor runs off the end of the query. Insertions in the name are free,
//! reordering and skipped query characters are not.

use super::Matcher;
use crate::types::{Query, SearchText};

/// Sidebar matcher. Strictly more permissive than substring, strictly cheaper
/// than the fuzzy tier: one pass over the name, no allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubsequenceMatcher;

impl SubsequenceMatcher {
    /// Is every character of `needle` present in `haystack`, in order?
    pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut pending = needle.chars().peekable();
        for c in haystack.chars() {
            match pending.peek() {
                Some(&want) if want == c => {
                    pending.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        pending.peek().is_none()
    }
}

impl Matcher for SubsequenceMatcher {
    fn matches(&self, text: &SearchText, query: &Query) -> bool {
        Self::is_subsequence(query.as_str(), &text.name)
    }
}
