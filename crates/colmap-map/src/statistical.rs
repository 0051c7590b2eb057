//! Term-weighted (TF-IDF) cosine similarity over a two-document corpus.
//!
//! Each column name is treated as one document. Underscores become word
//! separators, text is lower-cased and split into alphanumeric runs; runs
//! shorter than two characters are not terms.
//!
//! Weights use raw term counts and smoothed IDF,
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with `n = 2`, so a term shared by
//! both names weighs 1.0 and a term unique to one name weighs `ln(1.5) + 1`.
//! Vectors are L2-normalised and compared with the dot product.

use std::collections::BTreeMap;

use tracing::trace;

/// Number of documents in the corpus: the two names being compared.
const CORPUS_SIZE: f64 = 2.0;

/// Minimum characters for a token to count as a term.
const MIN_TERM_CHARS: usize = 2;

/// Returns the TF-IDF cosine similarity of `a` and `b` in `[0, 1]`.
///
/// Names that yield no terms on either side (punctuation, single letters)
/// cannot be vectorized and score 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = term_counts(a);
    let right = term_counts(b);
    if left.is_empty() || right.is_empty() {
        trace!(a, b, "degenerate vectorization, statistical similarity is 0");
        return 0.0;
    }
    if left == right {
        return 1.0;
    }

    let left_weights = weigh(&left, &right);
    let right_weights = weigh(&right, &left);
    let left_norm = l2_norm(&left_weights);
    let right_norm = l2_norm(&right_weights);
    if left_norm == 0.0 || right_norm == 0.0 {
        trace!(a, b, "zero-length term vector, statistical similarity is 0");
        return 0.0;
    }

    let dot: f64 = left_weights
        .iter()
        .filter_map(|(term, weight)| right_weights.get(term).map(|other| weight * other))
        .sum();
    (dot / (left_norm * right_norm)).clamp(0.0, 1.0)
}

/// Splits a column name into lower-cased terms.
pub fn tokenize(name: &str) -> Vec<String> {
    name.replace('_', " ")
        .to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

fn term_counts(name: &str) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for term in tokenize(name) {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

/// TF-IDF weights for `doc`, with document frequency taken over `doc` and `other`.
fn weigh<'a>(
    doc: &'a BTreeMap<String, f64>,
    other: &BTreeMap<String, f64>,
) -> BTreeMap<&'a str, f64> {
    doc.iter()
        .map(|(term, count)| {
            let df = if other.contains_key(term) { 2.0 } else { 1.0 };
            (term.as_str(), count * idf(df))
        })
        .collect()
}

fn idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}

fn l2_norm(weights: &BTreeMap<&str, f64>) -> f64 {
    weights.values().map(|w| w * w).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_weight() -> f64 {
        1.5f64.ln() + 1.0
    }

    #[test]
    fn tokenizes_on_underscores_and_punctuation() {
        assert_eq!(tokenize("Annual_Premium"), vec!["annual", "premium"]);
        assert_eq!(tokenize("location-city.v2"), vec!["location", "city", "v2"]);
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(tokenize("a_b_id"), vec!["id"]);
        assert!(tokenize("x").is_empty());
    }

    #[test]
    fn identical_names_score_one() {
        assert_eq!(similarity("holder_id", "holder_id"), 1.0);
        assert_eq!(similarity("Premium", "premium"), 1.0);
    }

    #[test]
    fn no_shared_terms_score_zero() {
        assert_eq!(similarity("gender", "sex"), 0.0);
    }

    #[test]
    fn shared_term_against_extra_term() {
        // "id" vs "holder id": 1 / sqrt(1 + w^2) where w is the unique-term weight
        let expected = 1.0 / (1.0 + unique_weight().powi(2)).sqrt();
        let score = similarity("id", "holder_id");
        assert!((score - expected).abs() < 1e-12, "got {score}");
        assert!((score - 0.5797).abs() < 1e-3);
    }

    #[test]
    fn degenerate_names_fall_back_to_zero() {
        assert_eq!(similarity("___", "premium"), 0.0);
        assert_eq!(similarity("x", "x"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn numeric_tokens_are_terms() {
        assert_eq!(similarity("2024", "2024"), 1.0);
        assert!(similarity("code_10", "region_10") > 0.0);
    }

    #[test]
    fn repeated_terms_count_more_than_once() {
        let once = similarity("claim_total", "claim");
        let twice = similarity("claim_claim_total", "claim");
        assert!(twice > once);
    }
}
