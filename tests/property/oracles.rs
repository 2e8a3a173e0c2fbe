//! Oracle implementations for differential testing.
//!
//! Each oracle is the most literal rendering of the rule it checks, with no
//! early exits, no row reuse and no precomputed text. If an oracle and the
//! library disagree, the oracle is right.

/// Full `(len(b)+1) × (len(a)+1)` Levenshtein table.
pub fn oracle_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut d = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for i in 0..=a.len() {
        d[0][i] = i;
    }
    for j in 0..=b.len() {
        d[j][0] = j;
    }
    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[j][i] = (d[j][i - 1] + 1)
                .min(d[j - 1][i] + 1)
                .min(d[j - 1][i - 1] + cost);
        }
    }
    d[b.len()][a.len()]
}

/// Similarity ratio straight from the definition.
pub fn oracle_similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let len = longer.chars().count();
    if len == 0 {
        return 1.0;
    }
    (len - oracle_levenshtein(longer, shorter)) as f64 / len as f64
}

/// Subsequence by repeated search for each query character.
pub fn oracle_subsequence(query: &str, name: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let mut from = 0;
    for q in query.chars() {
        match name[from..].iter().position(|&c| c == q) {
            Some(offset) => from += offset + 1,
            None => return false,
        }
    }
    true
}

/// The overlay rule, evaluated on raw fields with default thresholds.
pub fn oracle_overlay(name: &str, description: &str, id: &str, raw_query: &str) -> bool {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let name = name.to_lowercase();
    let description = description.to_lowercase();
    let id = id.to_lowercase();

    if name.contains(&query) || description.contains(&query) || id.contains(&query) {
        return true;
    }

    let combined = format!("{} {} {}", name, description, id);
    let words: Vec<&str> = query
        .split_whitespace()
        .filter(|w| w.chars().count() >= 2)
        .collect();
    if !words.is_empty() && words.iter().all(|w| combined.contains(w)) {
        return true;
    }

    if query.chars().count() < 3 {
        return false;
    }
    combined
        .split_whitespace()
        .filter(|w| w.chars().count() >= 3)
        .any(|w| w.starts_with(&query) || w.contains(&query) || oracle_similarity(w, &query) > 0.6)
}
