//! Levenshtein edit distance
//!
//! Classic dynamic-programming implementation with unit-cost insertions,
//! deletions, and substitutions, operating on Unicode scalar values. Used
//! as the similarity metric for misspelling correction; there is no
//! guarantee the closest match is semantically correct.

/// Minimum edit distance between two strings
///
/// Runs in O(|a| × |b|) time and O(min row) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single-row formulation: prev[j] holds the distance for the previous
    // character of `a` against the first j characters of `b`.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
