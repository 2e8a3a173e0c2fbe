// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: the raw Levenshtein distance (full and bounded), and the
//! similarity ratio the fuzzy tier thresholds against.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
