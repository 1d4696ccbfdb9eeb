//! Query enhancement
//!
//! Everything that happens to a query before any entity is searched:
//! misspelling correction, synonym expansion, autocomplete, and the
//! combined analysis consumed by the orchestrator. All functions are pure
//! over an injected [`Lexicon`], so behavior is fully determined by the
//! query and the configured vocabulary.

use crate::distance::levenshtein;
use remsearch_core::Lexicon;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Outcome of analyzing a raw query
#[derive(Debug, Clone)]
pub struct QueryAnalysis {
    /// The query as received, trimmed
    pub original_query: String,
    /// Lowercased query with corrected tokens substituted in
    pub processed_query: String,
    /// Processed tokens plus their synonyms, in discovery order
    pub expanded_terms: Vec<String>,
    /// Token corrections applied, as (original, corrected) pairs
    pub corrections: Vec<(String, String)>,
    /// Whether any token was corrected
    pub has_misspellings: bool,
    /// All related terms discovered during analysis, shortest first
    pub suggestions: Vec<String>,
}

/// Suggest corrections or related terms for a single word
///
/// Resolution order:
/// 1. Known misspelling: return the canonical term alone.
/// 2. Canonical term: return it with its synonyms, or nothing if it has
///    none (the word needs no correction).
/// 3. Synonym: return the canonical term with the other synonyms.
/// 4. Fuzzy fallback: every canonical term and synonym within edit
///    distance `max(2, floor(0.35 × candidate length))`, closest first.
///    Canonical terms implied by a matching synonym carry a half-step
///    penalty so direct matches sort ahead of them.
///
/// Words shorter than two characters are never corrected.
pub fn check_for_misspelling(lexicon: &Lexicon, word: &str) -> Vec<String> {
    if word.chars().count() < 2 {
        return Vec::new();
    }
    let word = word.trim().to_lowercase();

    if let Some(canonical) = lexicon.misspelling_canonical(&word) {
        return vec![canonical.to_string()];
    }

    if lexicon.is_dictionary_term(&word) {
        return match lexicon.synonyms_of(&word) {
            Some(synonyms) if !synonyms.is_empty() => {
                let mut out = Vec::with_capacity(synonyms.len() + 1);
                out.push(word);
                out.extend(synonyms.iter().cloned());
                out
            }
            _ => Vec::new(),
        };
    }

    if let Some((canonical, synonyms)) = lexicon.synonym_canonical(&word) {
        let mut out = Vec::with_capacity(synonyms.len());
        out.push(canonical.to_string());
        out.extend(synonyms.iter().filter(|s| **s != word).cloned());
        return out;
    }

    fuzzy_candidates(lexicon, &word)
}

fn fuzzy_candidates(lexicon: &Lexicon, word: &str) -> Vec<String> {
    let mut candidates: Vec<(String, f64)> = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for term in lexicon.dictionary_terms() {
        let distance = levenshtein(word, term);
        if distance <= fuzzy_threshold(term) {
            candidates.push((term.to_string(), distance as f64));
            seen.insert(term);
        }
    }

    for (canonical, synonyms) in lexicon.synonym_entries() {
        for synonym in synonyms {
            if seen.contains(synonym.as_str()) {
                continue;
            }
            let distance = levenshtein(word, synonym);
            if distance <= fuzzy_threshold(synonym) {
                candidates.push((synonym.clone(), distance as f64));
                seen.insert(synonym);
                if !seen.contains(canonical.as_str()) {
                    candidates.push((canonical.clone(), distance as f64 + 0.5));
                    seen.insert(canonical);
                }
            }
        }
    }

    // Stable sort keeps dictionary order among equal distances
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    candidates.into_iter().map(|(term, _)| term).collect()
}

fn fuzzy_threshold(candidate: &str) -> usize {
    2.max((candidate.chars().count() as f64 * 0.35).floor() as usize)
}

/// Expand a query into its tokens plus every registered synonym
///
/// Original tokens come first, then synonyms in table order. Duplicates
/// are dropped on first occurrence.
pub fn expand_query_with_synonyms(lexicon: &Lexicon, query: &str) -> Vec<String> {
    let lowered = query.trim().to_lowercase();
    let terms: Vec<&str> = lowered.split_whitespace().collect();

    let mut expanded: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for term in &terms {
        if seen.insert((*term).to_string()) {
            expanded.push((*term).to_string());
        }
    }
    for term in &terms {
        if let Some(synonyms) = lexicon.synonyms_of(term) {
            for synonym in synonyms {
                if seen.insert(synonym.clone()) {
                    expanded.push(synonym.clone());
                }
            }
        }
    }

    expanded
}

/// Autocomplete candidates for a partial query
///
/// Pulls from the prefix table, canonical terms that start with the
/// query, and the synonyms of those terms, then orders prefix matches
/// first and shorter terms before longer ones.
pub fn autocomplete_suggestions(lexicon: &Lexicon, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut push_unique = |suggestions: &mut Vec<String>, word: &str| {
        if seen.insert(word.to_string()) {
            suggestions.push(word.to_string());
        }
    };

    for (prefix, words) in lexicon.autocomplete_entries() {
        if query.starts_with(prefix.as_str()) {
            for word in words {
                push_unique(&mut suggestions, word);
            }
        }
    }

    for (term, synonyms) in lexicon.synonym_entries() {
        if term.starts_with(&query) {
            push_unique(&mut suggestions, term);
            for synonym in synonyms {
                push_unique(&mut suggestions, synonym);
            }
        }
    }

    suggestions.sort_by(|a, b| {
        let a_prefix = a.starts_with(&query);
        let b_prefix = b.starts_with(&query);
        match (a_prefix, b_prefix) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.len().cmp(&b.len()),
        }
    });

    suggestions.truncate(limit);
    suggestions
}

/// Analyze a raw query: correct tokens, expand synonyms, collect
/// suggestions
///
/// Each whitespace token is run through [`check_for_misspelling`]; when
/// the top suggestion differs from the token it is substituted into the
/// processed query. Synonym expansion runs over the corrected query.
pub fn process_search_query(lexicon: &Lexicon, query: &str) -> QueryAnalysis {
    let original_query = query.trim().to_string();
    let lowered = original_query.to_lowercase();

    let mut corrections: Vec<(String, String)> = Vec::new();
    let mut has_misspellings = false;
    let mut all_suggestions: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    let corrected_terms: Vec<String> = lowered
        .split_whitespace()
        .map(|term| {
            let suggestions = check_for_misspelling(lexicon, term);
            for suggestion in &suggestions {
                if seen.insert(suggestion.clone()) {
                    all_suggestions.push(suggestion.clone());
                }
            }
            match suggestions.first() {
                Some(first) if first != term => {
                    corrections.push((term.to_string(), first.clone()));
                    has_misspellings = true;
                    first.clone()
                }
                _ => term.to_string(),
            }
        })
        .collect();

    let processed_query = corrected_terms.join(" ");
    let expanded_terms = expand_query_with_synonyms(lexicon, &processed_query);

    for term in &expanded_terms {
        if *term != processed_query && seen.insert(term.clone()) {
            all_suggestions.push(term.clone());
        }
    }
    all_suggestions.sort_by_key(|s| s.len());

    QueryAnalysis {
        original_query,
        processed_query,
        expanded_terms,
        corrections,
        has_misspellings,
        suggestions: all_suggestions,
    }
}

/// Alternative whole-query spellings, best first
///
/// Starts with the corrected query when the analysis found misspellings,
/// then substitutes near-miss dictionary terms for each query word.
pub fn spelling_suggestions(lexicon: &Lexicon, query: &str, limit: usize) -> Vec<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();

    let analysis = process_search_query(lexicon, &normalized);
    if analysis.has_misspellings && !analysis.corrections.is_empty() {
        suggestions.push(analysis.processed_query);
    }

    'words: for word in normalized.split_whitespace() {
        if word.chars().count() < 3 {
            continue;
        }
        for similar in find_similar_words(lexicon, word, limit) {
            if similar == word {
                continue;
            }
            let candidate = replace_word(&normalized, word, &similar);
            if candidate != normalized && !suggestions.contains(&candidate) {
                suggestions.push(candidate);
                if suggestions.len() >= limit {
                    break 'words;
                }
            }
        }
        if suggestions.len() >= limit {
            break;
        }
    }

    suggestions
}

/// Closest canonical terms to a word by edit distance, no threshold
fn find_similar_words(lexicon: &Lexicon, word: &str, limit: usize) -> Vec<String> {
    let mut scored: Vec<(&str, usize)> = lexicon
        .dictionary_terms()
        .map(|term| (term, levenshtein(word, term)))
        .collect();
    scored.sort_by_key(|(_, distance)| *distance);
    scored
        .into_iter()
        .take(limit)
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Replace whole-token occurrences of `from` with `to`
fn replace_word(query: &str, from: &str, to: &str) -> String {
    query
        .split_whitespace()
        .map(|token| if token == from { to } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combined suggestion list for the search box dropdown
///
/// Autocomplete candidates, joined by whole-query spelling alternatives
/// when the query looks misspelled.
pub fn search_suggestions(lexicon: &Lexicon, query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let autocomplete = autocomplete_suggestions(lexicon, query, limit);
    if check_for_misspelling(lexicon, query).is_empty() {
        return autocomplete;
    }

    let spelling = spelling_suggestions(lexicon, query, limit);
    let mut combined: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for suggestion in autocomplete.into_iter().chain(spelling) {
        if seen.insert(suggestion.clone()) {
            combined.push(suggestion);
        }
    }
    combined.truncate(limit);
    combined
}
