//! Text preprocessing pipeline: tokenize -> drop stop words -> stem.
//!
//! The same pipeline runs over corpus documents and over queries, so the two
//! always land in the same term space.

pub mod lexicon;
pub mod stemmer;

pub use stemmer::stem;

use lexicon::{is_stop_word, COMPOUND_PHRASES};

/// Lowercase, fold compound phrases into underscored tokens, then split.
///
/// Everything except ASCII letters, digits and `_` separates tokens.
/// Tokens of a single character are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut lowered = text.to_lowercase();
    for (phrase, token) in COMPOUND_PHRASES {
        if lowered.contains(phrase) {
            lowered = lowered.replace(phrase, token);
        }
    }
    lowered
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|tok| tok.len() > 1)
        .map(str::to_string)
        .collect()
}

pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|tok| !is_stop_word(tok)).collect()
}

/// Canonical pipeline entry point for documents and queries alike.
pub fn preprocess(text: &str) -> Vec<String> {
    remove_stopwords(tokenize(text))
        .iter()
        .map(|tok| stem(tok))
        .collect()
}

/// Tokenized and stop-word filtered, but not stemmed. Display only.
pub fn display_tokens(text: &str) -> Vec<String> {
    remove_stopwords(tokenize(text))
}

/// Sliding-window n-grams joined by a single space.
pub fn generate_ngrams<T: AsRef<str>>(tokens: &[T], n: usize) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }
    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}
