// Stopword lists for keyword filtering.
//
// Two lists are available: the NLTK English word list, compiled into the
// binary via the `stop-words` crate's `nltk` feature (the crate's default
// ISO list is much larger and swallows content words like "away" or
// "new"), and a hand-curated fallback of common English function words.
// The corpus list is what the request pipeline uses; the custom list is
// kept as a self-contained alternative that needs no corpus at all.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Which stopword list to filter against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordList {
    /// The standard English stopword corpus (stop-words crate).
    Corpus,
    /// The fixed hand-curated fallback list below.
    Custom,
}

impl StopwordList {
    /// Is `word` a stopword under this list? Expects lowercased input.
    pub fn contains(&self, word: &str) -> bool {
        match self {
            StopwordList::Corpus => CORPUS.contains(word),
            StopwordList::Custom => CUSTOM.contains(word),
        }
    }
}

// Process-wide, initialized on first use. LazyLock guards concurrent
// first access from parallel requests.
static CORPUS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

static CUSTOM: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CUSTOM_STOPWORDS.iter().copied().collect());

/// Fallback stopword list — usable when the corpus list is not wanted.
const CUSTOM_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now",
];
