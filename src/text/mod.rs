// Text normalization — tokenize, drop stopwords, stem.
//
// This is the single analyzer used on both sides of the match: the user's
// input is normalized into keywords here, and the similarity vectorizer
// runs headline text through the same function so query terms and headline
// terms land in one term space.

use std::sync::LazyLock;

use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};

pub mod stopwords;

pub use stopwords::StopwordList;

// Maximal runs of word characters; everything else is a separator.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word token pattern is valid"));

// Snowball English stemmer, initialized once per process.
static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Split `text` into lowercase word tokens, in input order.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reduce a lowercase word to its stem.
pub fn stem(word: &str) -> String {
    STEMMER.stem(word).into_owned()
}

/// Extract normalized keywords from free text: tokenize, drop words on the
/// given stopword list, stem the survivors.
///
/// Order follows input order after filtering; duplicates are kept. Returns
/// an empty vector for empty or all-stopword input.
pub fn extract_keywords(text: &str, list: StopwordList) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|word| !list.contains(word))
        .map(|word| stem(&word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_punctuation_and_lowercases() {
        let tokens = tokenize("Hello, World! climate-change_2024");
        assert_eq!(tokens, vec!["hello", "world", "climate", "change_2024"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ...  !!").is_empty());
    }

    #[test]
    fn keywords_drop_stopwords_and_keep_order() {
        let keywords = extract_keywords("the cats are running away", StopwordList::Corpus);
        // "the", "are" removed; survivors stemmed in input order
        assert_eq!(keywords, vec!["cat", "run", "away"]);
    }

    #[test]
    fn keywords_never_exceed_token_count() {
        let inputs = [
            "climate change policy",
            "the the the",
            "A sentence, with punctuation; and stopwords everywhere!",
            "",
        ];
        for input in inputs {
            let token_count = tokenize(input).len();
            let keywords = extract_keywords(input, StopwordList::Corpus);
            assert!(
                keywords.len() <= token_count,
                "{input:?}: {} keywords from {token_count} tokens",
                keywords.len()
            );
        }
    }

    #[test]
    fn keywords_are_deterministic() {
        let input = "Markets rallied today after the announcement of new policies";
        let a = extract_keywords(input, StopwordList::Corpus);
        let b = extract_keywords(input, StopwordList::Corpus);
        assert_eq!(a, b);
    }

    #[test]
    fn keywords_keep_duplicates() {
        let keywords = extract_keywords("change change change", StopwordList::Corpus);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn all_stopword_input_yields_nothing() {
        assert!(extract_keywords("the and of is", StopwordList::Corpus).is_empty());
    }

    #[test]
    fn custom_list_is_usable_directly() {
        let keywords = extract_keywords("the weather is nice", StopwordList::Custom);
        assert_eq!(keywords, vec!["weather", "nice"]);
    }
}
