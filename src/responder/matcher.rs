//! Staged answer resolution over the knowledge store
//!
//! Resolution tries an exact key lookup first, then the loose keyword
//! overlap heuristic, then the fuzzy overlap ratio. The first qualifying
//! entry in store order wins; entries are never similarity-ranked.

use std::collections::HashSet;

use crate::knowledge::KnowledgeStore;

/// Resolve an answer for normalized input, or `None` when no stage matches.
pub fn resolve<'a>(normalized_input: &str, store: &'a KnowledgeStore) -> Option<&'a str> {
    exact_match(normalized_input, store)
        .or_else(|| keyword_match(normalized_input, store))
        .or_else(|| fuzzy_match(normalized_input, store))
}

/// Stage 1: the normalized input equals a stored key verbatim.
pub fn exact_match<'a>(normalized_input: &str, store: &'a KnowledgeStore) -> Option<&'a str> {
    store.get(normalized_input)
}

/// Stage 2: first entry sharing at least one whitespace token with the
/// input.
pub fn keyword_match<'a>(normalized_input: &str, store: &'a KnowledgeStore) -> Option<&'a str> {
    let input_words = word_set(normalized_input);
    if input_words.is_empty() {
        return None;
    }

    store.iter().find_map(|record| {
        let entry_words = word_set(&record.key);
        entry_words
            .intersection(&input_words)
            .next()
            .map(|_| record.answer.as_str())
    })
}

/// Stage 3: first entry whose shared-word count, measured against the input
/// word count, strictly exceeds 0.5.
///
/// The denominator is clamped to at least 1 so empty input cannot divide by
/// zero; an empty input then scores 0 against every entry.
pub fn fuzzy_match<'a>(normalized_input: &str, store: &'a KnowledgeStore) -> Option<&'a str> {
    let input_words = word_set(normalized_input);

    store.iter().find_map(|record| {
        let entry_words = word_set(&record.key);
        let shared = entry_words.intersection(&input_words).count();
        let ratio = shared as f64 / input_words.len().max(1) as f64;
        (ratio > 0.5).then(|| record.answer.as_str())
    })
}

fn word_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}
