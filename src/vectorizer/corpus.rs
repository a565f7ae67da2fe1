use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document count and per-term document frequency for one corpus snapshot.
///
/// A term is counted once per document no matter how often it repeats there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    doc_num: u64,
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document given its distinct terms.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_counts.contains_key(term)
    }

    /// Current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(t, c)| (t.as_ref(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_per_term() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["brake", "rotor"]);
        corpus.add_set(&["brake", "caliper"]);
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("brake"), 2);
        assert_eq!(corpus.get_term_count("rotor"), 1);
        assert_eq!(corpus.get_term_count("clutch"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }
}
