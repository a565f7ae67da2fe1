use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TokenFrequency
/// Term occurrence counts for one document, in first-seen order.
///
/// # Examples
/// ```
/// use autodiag_retrieval::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["brake", "rotor", "brake"]);
/// assert_eq!(freq.token_count("brake"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Self {
        let mut freq = Self::new();
        freq.add_tokens(tokens);
        freq
    }

    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        *self.token_count.entry(token.to_string()).or_insert(0) += 1;
        self.total_token_count += 1;
        self
    }

    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// occurrences of `token`, 0 if never seen
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// total number of tokens added (document length)
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// number of distinct tokens
    #[inline]
    pub fn unique_token_count(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// distinct tokens as string slices, first-seen order
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// count / total for one token; 0 for an empty document
    #[inline]
    pub fn tf(&self, token: &str) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count(token) as f64 / self.total_token_count as f64
    }
}
