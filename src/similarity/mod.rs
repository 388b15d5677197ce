// TF-IDF vectorization and cosine similarity scoring.
//
// The query (the user's joined keywords) and every headline are vectorized
// over one shared term space: raw term counts weighted by smoothed IDF
// (ln((1+n)/(1+df)) + 1), then L2-normalized. Cosine similarity of two
// normalized vectors is their dot product, so scores land in [0, 1] and an
// identical document scores 1.0 against itself.
//
// Headline text passes through the same analyzer as the user's input
// (tokenize, corpus stopword filter, stem) — see the text module.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::config::DEFAULT_THRESHOLD;
use crate::fetch::Headline;
use crate::text::{extract_keywords, StopwordList};

/// A sparse document vector: term -> weight.
type TermVector = HashMap<String, f64>;

/// Score all `headlines` against the user's `keywords` and return the
/// formatted report line for every headline whose cosine similarity
/// strictly exceeds `threshold`.
///
/// Result order follows headline order, not score order. An empty headline
/// slice short-circuits to an empty result.
pub fn match_headlines(
    keywords: &[String],
    headlines: &[Headline],
    threshold: f64,
) -> Vec<String> {
    if headlines.is_empty() {
        return Vec::new();
    }

    let query = keywords.join(" ");

    // Analyze every document once: query first, then each headline.
    let mut docs: Vec<Vec<String>> = Vec::with_capacity(headlines.len() + 1);
    docs.push(extract_keywords(&query, StopwordList::Corpus));
    for headline in headlines {
        docs.push(extract_keywords(&headline.text, StopwordList::Corpus));
    }

    let idf = inverse_document_frequencies(&docs);
    let vectors: Vec<TermVector> = docs.iter().map(|doc| tfidf_vector(doc, &idf)).collect();

    let query_vector = &vectors[0];

    let mut matches = Vec::new();
    for (headline, vector) in headlines.iter().zip(&vectors[1..]) {
        let score = cosine(query_vector, vector);
        debug!(source = headline.source, score, "scored headline");
        if score > threshold {
            matches.push(format!(
                "Headline match found from {}: {}",
                headline.source, headline.text
            ));
        }
    }

    info!(
        headlines = headlines.len(),
        matches = matches.len(),
        "similarity pass complete"
    );

    matches
}

/// `match_headlines` with the default threshold.
pub fn match_headlines_default(keywords: &[String], headlines: &[Headline]) -> Vec<String> {
    match_headlines(keywords, headlines, DEFAULT_THRESHOLD)
}

/// Smoothed inverse document frequency for every term in the corpus:
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1.
fn inverse_document_frequencies(docs: &[Vec<String>]) -> HashMap<String, f64> {
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    let n = docs.len() as f64;
    document_frequency
        .into_iter()
        .map(|(term, df)| {
            let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect()
}

/// Build the L2-normalized TF-IDF vector for one analyzed document.
fn tfidf_vector(doc: &[String], idf: &HashMap<String, f64>) -> TermVector {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for term in doc {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }

    let mut vector: TermVector = counts
        .into_iter()
        .map(|(term, tf)| {
            let weight = tf * idf.get(term).copied().unwrap_or(1.0);
            (term.to_string(), weight)
        })
        .collect();

    let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }

    vector
}

/// Cosine similarity of two L2-normalized sparse vectors. A zero vector
/// on either side scores 0.0.
fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    // Both vectors are normalized, so the dot product is the cosine.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(text: &str, source: &str) -> Headline {
        Headline {
            text: text.to_string(),
            source: source.to_string(),
        }
    }

    fn kw(text: &str) -> Vec<String> {
        extract_keywords(text, StopwordList::Corpus)
    }

    #[test]
    fn empty_headlines_short_circuit() {
        let keywords = kw("climate change policy");
        assert!(match_headlines_default(&keywords, &[]).is_empty());
    }

    #[test]
    fn identical_text_scores_highest_and_matches() {
        let keywords = kw("climate change policy");
        let joined = keywords.join(" ");
        let headlines = vec![
            headline("sports results from last night", "A"),
            headline(&joined, "B"),
            headline("local election coverage continues", "C"),
        ];

        let matches = match_headlines_default(&keywords, &headlines);
        assert!(
            matches.iter().any(|m| m.contains("from B")),
            "identical headline must match: {matches:?}"
        );

        // Self-similarity must dominate: with only the identical headline
        // above threshold, nothing else may appear.
        for m in &matches {
            assert!(m.contains("from B"), "unexpected match {m}");
        }
    }

    #[test]
    fn unrelated_headlines_do_not_match() {
        let keywords = kw("climate change policy");
        let headlines = vec![
            headline("quarterback trade rumors swirl", "Sports"),
            headline("new recipe for sourdough bread", "Food"),
        ];
        assert!(match_headlines_default(&keywords, &headlines).is_empty());
    }

    #[test]
    fn raising_threshold_never_adds_matches() {
        let keywords = kw("climate change policy");
        let headlines = vec![
            headline("new climate change policy announced today", "BBC"),
            headline("climate summit opens", "CNN"),
            headline("stock markets fall sharply", "AP"),
        ];

        let mut previous = usize::MAX;
        for threshold in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9] {
            let count = match_headlines(&keywords, &headlines, threshold).len();
            assert!(count <= previous, "threshold {threshold} grew matches");
            previous = count;
        }
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let headlines = vec![headline("new climate change policy announced today", "BBC")];
        assert!(match_headlines_default(&[], &headlines).is_empty());
    }

    #[test]
    fn match_string_format_is_exact() {
        let keywords = kw("climate change policy");
        let headlines = vec![headline("new climate change policy announced today", "BBC")];
        let matches = match_headlines_default(&keywords, &headlines);
        assert_eq!(
            matches,
            vec![
                "Headline match found from BBC: new climate change policy announced today"
                    .to_string()
            ]
        );
    }

    #[test]
    fn result_order_follows_headline_order() {
        let keywords = kw("climate change policy");
        let headlines = vec![
            headline("climate change policy shift debated", "Second"),
            headline("new climate change policy announced today", "First"),
        ];
        let matches = match_headlines_default(&keywords, &headlines);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].contains("from Second"));
        assert!(matches[1].contains("from First"));
    }

    #[test]
    fn cosine_of_disjoint_vectors_is_zero() {
        let a: TermVector = [("alpha".to_string(), 1.0)].into_iter().collect();
        let b: TermVector = [("beta".to_string(), 1.0)].into_iter().collect();
        assert_eq!(cosine(&a, &b), 0.0);
    }
}
