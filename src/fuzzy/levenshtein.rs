// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, full and bounded.
//!
//! The full version is the textbook DP, kept to a single row. The bounded
//! version exploits two lower bounds: `|len(a) - len(b)|` can never be beaten,
//! and once every cell in a row exceeds `max` the final cell will too. Catalog
//! words are short, but the fuzzy tier compares the query against every word
//! of every entry on every keystroke, so most comparisons should never finish
//! the table.
//!
//! Both count Unicode scalar values, not bytes.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Symmetric, and zero iff the strings are equal. There is no length cap;
/// callers feed it single words.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        // row[j] still holds d[i-1][j] until overwritten
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[b_chars.len()]
}

/// Edit distance if it is at most `max`, `None` otherwise.
///
/// Two early-exit paths:
/// 1. If length difference exceeds `max`, return immediately
/// 2. If minimum row value exceeds `max`, abandon the DP
///
/// Both are sound: row minima never decrease, and the length difference is
/// a lower bound on the distance.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();

    if a_len.abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            min_row = min_row.min(row[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = row[b_chars.len()];
    (distance <= max).then_some(distance)
}
