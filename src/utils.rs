// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

#[cfg(feature = "fold-diacritics")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a raw query: trim surrounding whitespace, then fold case.
///
/// Inner whitespace is left alone. The whole-word tier splits on it, and
/// the exact tier must see the query the way the user typed it.
pub fn normalize(value: &str) -> String {
    fold_case(value.trim())
}

/// Lowercase a catalog field for matching.
///
/// With the `fold-diacritics` feature, combining marks are stripped too:
/// - "validação" → "validacao"
/// - "código" → "codigo"
///
/// # Algorithm (with fold-diacritics)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
#[cfg(feature = "fold-diacritics")]
pub fn fold_case(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase a catalog field for matching.
#[cfg(not(feature = "fold-diacritics"))]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "fold-diacritics")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Length in Unicode scalar values, not bytes.
///
/// Every length threshold in the matchers counts characters, so "ção" is
/// three long even though it is five bytes of UTF-8.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
