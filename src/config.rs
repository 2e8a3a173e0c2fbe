// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for the tiered matcher.
//!
//! The defaults are hand-tuned product decisions, not derived invariants, so
//! they live here instead of being baked into the tiers.
//!
//! # File format
//!
//! ```json
//! {
//!   "similarity_threshold": 0.6,
//!   "min_fuzzy_query_len": 3,
//!   "min_fuzzy_word_len": 3,
//!   "min_query_word_len": 2
//! }
//! ```
//!
//! Every field is optional. Unknown fields are rejected so a typo in a key
//! doesn't silently fall back to the default.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fuzzy tier accepts a word only above this similarity.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Queries shorter than this never reach the fuzzy tier.
pub const DEFAULT_MIN_FUZZY_QUERY_LEN: usize = 3;

/// Catalog words shorter than this are ignored by the fuzzy tier.
pub const DEFAULT_MIN_FUZZY_WORD_LEN: usize = 3;

/// Query words shorter than this are ignored by the whole-word tier.
pub const DEFAULT_MIN_QUERY_WORD_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Strict lower bound on `similarity(word, query)` in the fuzzy tier.
    pub similarity_threshold: f64,
    /// Minimum query length (characters) for the fuzzy tier to run at all.
    pub min_fuzzy_query_len: usize,
    /// Minimum length (characters) of a catalog word considered by the fuzzy tier.
    pub min_fuzzy_word_len: usize,
    /// Minimum length (characters) of a query word required by the whole-word tier.
    pub min_query_word_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_fuzzy_query_len: DEFAULT_MIN_FUZZY_QUERY_LEN,
            min_fuzzy_word_len: DEFAULT_MIN_FUZZY_WORD_LEN,
            min_query_word_len: DEFAULT_MIN_QUERY_WORD_LEN,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded match config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Invalid(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.min_query_word_len == 0 {
            return Err(ConfigError::Invalid(
                "min_query_word_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
