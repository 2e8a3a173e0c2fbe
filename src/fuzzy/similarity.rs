// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity ratio: edit distance normalized by the longer string.
//!
//! `similarity = (len(longer) - distance) / len(longer)`, in `[0, 1]`.
//! Two empty strings are identical (1.0).

use super::levenshtein::{edit_distance, edit_distance_within};

/// Similarity ratio between two strings, in `[0, 1]`.
///
/// The first argument is treated as the longer one when lengths tie, which
/// has no effect on the value since edit distance is symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, longer_len) = if a_len >= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if longer_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(longer, shorter);
    ratio(longer_len, distance)
}

/// `similarity(a, b) > threshold`, without always finishing the DP table.
///
/// Works out the largest distance that still clears the threshold (using the
/// same float expression as [`similarity`], so the two never disagree) and
/// hands it to the bounded edit distance as its cutoff.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    let longer_len = a.chars().count().max(b.chars().count());
    if longer_len == 0 {
        return 1.0 > threshold;
    }

    // ratio() falls as distance grows, so scan down from the most lenient
    let Some(max_distance) = (0..=longer_len)
        .rev()
        .find(|&d| ratio(longer_len, d) > threshold)
    else {
        return false;
    };

    edit_distance_within(a, b, max_distance).is_some()
}

#[inline]
fn ratio(longer_len: usize, distance: usize) -> f64 {
    (longer_len - distance) as f64 / longer_len as f64
}
