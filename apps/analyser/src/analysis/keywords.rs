//! Keyword Extractor — normalizes text into a frequency-filtered keyword list.
//!
//! Exact-token matching only: no stemming, no lemmatization. A token counts
//! as a keyword when it survives the stop-word and length filters and occurs
//! at least twice in the text.

use std::collections::HashMap;

/// Common English function words excluded from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by",
    "of", "a", "an", "is", "are", "was", "were", "be", "been", "being", "am",
    "do", "does", "did", "doing", "have", "has", "had", "having", "will",
    "would", "shall", "should", "can", "could", "may", "might", "must", "not",
    "no", "nor", "so", "too", "very", "just", "than", "then", "that", "this",
    "these", "those", "there", "here", "where", "when", "what", "which", "who",
    "whom", "whose", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "only", "own", "same", "also", "into",
    "over", "under", "again", "further", "once", "about", "above", "below",
    "between", "through", "during", "before", "after", "you", "your", "they",
    "them", "their", "our", "its", "his", "her",
];

/// Minimum occurrences for a token to be reported as a keyword.
const MIN_FREQUENCY: usize = 2;

/// Lowercases and maps every non letter/digit/underscore character to a space.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Counts surviving tokens, preserving first-seen order.
fn count_tokens(normalized: &str) -> (Vec<&str>, HashMap<&str, usize>) {
    let mut order: Vec<&str> = Vec::new();
    let mut freq: HashMap<&str, usize> = HashMap::new();

    for token in normalized.split_whitespace() {
        if token.len() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = freq.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    (order, freq)
}

/// Extracts keywords from free text.
///
/// Lowercases, replaces every non-word character with a space, splits on
/// whitespace, drops tokens of length ≤ 2 and stop words, then keeps tokens
/// occurring at least [`MIN_FREQUENCY`] times, in first-seen order.
///
/// Deterministic and total: empty or degenerate text yields an empty list.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let (order, freq) = count_tokens(&normalized);

    order
        .into_iter()
        .filter(|t| freq[t] >= MIN_FREQUENCY)
        .map(str::to_string)
        .collect()
}

/// Keyword frequency map over a text body, with the same filtering rules as
/// [`extract_keywords`]: only keywords occurring at least [`MIN_FREQUENCY`]
/// times are retained.
pub fn keyword_frequencies(text: &str) -> HashMap<String, usize> {
    let normalized = normalize(text);
    let (_, freq) = count_tokens(&normalized);

    freq.into_iter()
        .filter(|(_, count)| *count >= MIN_FREQUENCY)
        .map(|(token, count)| (token.to_string(), count))
        .collect()
}
