pub mod corpus;
pub mod evaluate;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::types::SparseVector;
use crate::vectorizer::{
    corpus::Corpus,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TokenFrequency,
};

/// IDF table cached at build time, keyed in corpus first-seen order.
#[derive(Debug, Clone, Default)]
pub struct IDFVector {
    pub idf_vec: IndexMap<Box<str>, f64>,
    /// document count the table was computed from
    pub doc_num: u64,
}

/// State that only exists after `build_index`.
#[derive(Debug, Clone)]
struct BuiltIndex {
    corpus: Corpus,
    idf_cache: IDFVector,
}

/// TF-IDF index over a fixed document snapshot.
///
/// Lifecycle: construct, call [`TFIDFVectorizer::build_index`] once, then
/// vectorize and query freely. Building again replaces everything; it is
/// never incremental. Using the index before it is built returns
/// [`EngineError::NotInitialized`].
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    index: Option<BuiltIndex>,
    _marker: PhantomData<E>,
}

impl<E: TFIDFEngine> Default for TFIDFVectorizer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TFIDFEngine> TFIDFVectorizer<E> {
    pub fn new() -> Self {
        Self {
            index: None,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.index.is_some()
    }

    fn built(&self) -> Result<&BuiltIndex> {
        self.index.as_ref().ok_or(EngineError::NotInitialized {
            component: "TF-IDF index",
        })
    }

    /// Build document frequencies and the IDF table from `(id, tokens)` pairs.
    pub fn build_index<K, T>(&mut self, documents: &[(K, Vec<T>)])
    where
        T: AsRef<str>,
    {
        let mut corpus = Corpus::new();
        for (_, tokens) in documents {
            let freq = TokenFrequency::from_tokens(tokens);
            corpus.add_set(&freq.token_set_ref_str());
        }

        let doc_num = corpus.get_doc_num();
        let idf_vec = corpus
            .terms()
            .map(|(term, df)| (Box::<str>::from(term), E::idf(doc_num, df)))
            .collect();

        debug!(
            documents = doc_num,
            vocabulary = corpus.vocab_size(),
            "built tf-idf index"
        );
        self.index = Some(BuiltIndex {
            corpus,
            idf_cache: IDFVector { idf_vec, doc_num },
        });
    }

    /// TF-IDF vector of one token list. Only strictly positive weights are kept;
    /// terms the corpus never saw weigh zero.
    pub fn vectorize<T: AsRef<str>>(&self, id: &str, tokens: &[T]) -> Result<SparseVector> {
        let index = self.built()?;
        let freq = TokenFrequency::from_tokens(tokens);
        let token_sum = freq.token_sum();
        let weights: IndexMap<String, f64> = freq
            .iter()
            .filter_map(|(term, count)| {
                let idf = index.idf_cache.idf_vec.get(term).copied().unwrap_or(0.0);
                let weight = E::tf(count, token_sum) * idf;
                (weight > 0.0).then(|| (term.to_string(), weight))
            })
            .collect();
        Ok(SparseVector::from_weights(id, weights))
    }

    /// IDF of `term`; 0 for terms outside the corpus.
    pub fn get_idf(&self, term: &str) -> Result<f64> {
        let index = self.built()?;
        Ok(index.idf_cache.idf_vec.get(term).copied().unwrap_or(0.0))
    }

    /// Number of documents containing `term` (0 before the index is built).
    pub fn get_document_frequency(&self, term: &str) -> u64 {
        self.index
            .as_ref()
            .map_or(0, |index| index.corpus.get_term_count(term))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.corpus.vocab_size())
    }

    pub fn doc_num(&self) -> u64 {
        self.index.as_ref().map_or(0, |index| index.corpus.get_doc_num())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.index
            .as_ref()
            .is_some_and(|index| index.corpus.contains_term(term))
    }

    /// The `n` rarest terms, highest IDF first; ties broken alphabetically.
    pub fn top_terms_by_idf(&self, n: usize) -> Vec<(String, f64)> {
        let Some(index) = self.index.as_ref() else {
            return Vec::new();
        };
        let mut terms: Vec<(String, f64)> = index
            .idf_cache
            .idf_vec
            .iter()
            .map(|(term, idf)| (term.to_string(), *idf))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(n);
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<(String, Vec<String>)> {
        let raw: [(&str, &[&str]); 4] = [
            ("d1", &["brake", "squeal", "brake"]),
            ("d2", &["brake", "rotor"]),
            ("d3", &["coolant", "leak"]),
            ("d4", &["battery", "dead"]),
        ];
        raw.iter()
            .map(|(id, toks)| (id.to_string(), toks.iter().map(|t| t.to_string()).collect()))
            .collect()
    }

    #[test]
    fn vectorize_before_build_fails_loudly() {
        let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        let err = vectorizer.vectorize("q", &["brake"]).unwrap_err();
        assert!(matches!(err, EngineError::NotInitialized { .. }));
        assert!(vectorizer.get_idf("brake").is_err());
    }

    #[test]
    fn idf_follows_formula_for_every_term() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        vectorizer.build_index(&docs());
        for term in ["brake", "squeal", "rotor", "coolant", "leak", "battery", "dead"] {
            let df = vectorizer.get_document_frequency(term);
            assert!(df >= 1);
            let expected = (4.0 / (1.0 + df as f64)).ln();
            assert!((vectorizer.get_idf(term).unwrap() - expected).abs() < 1e-12);
        }
        assert_eq!(vectorizer.get_document_frequency("brake"), 2);
        assert_eq!(vectorizer.get_idf("transmission").unwrap(), 0.0);
        assert_eq!(vectorizer.vocabulary_size(), 7);
    }

    #[test]
    fn vectorize_drops_non_positive_weights() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        vectorizer.build_index(&docs());
        // brake: ln(4/3) > 0, squeal: ln(2) > 0, unknown term dropped
        let v = vectorizer
            .vectorize("q", &["brake", "squeal", "transmission"])
            .unwrap();
        assert_eq!(v.len(), 2);
        assert!((v.weight("squeal") - (2.0_f64).ln() / 3.0).abs() < 1e-12);
        assert_eq!(v.weight("transmission"), 0.0);
        let expected_mag = (v.weight("brake").powi(2) + v.weight("squeal").powi(2)).sqrt();
        assert!((v.magnitude() - expected_mag).abs() < 1e-12);
    }

    #[test]
    fn rebuild_replaces_instead_of_accumulating() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        vectorizer.build_index(&docs());
        vectorizer.build_index(&docs());
        assert_eq!(vectorizer.doc_num(), 4);
        assert_eq!(vectorizer.get_document_frequency("brake"), 2);

        vectorizer.build_index(&docs()[..2]);
        assert_eq!(vectorizer.doc_num(), 2);
        assert!(!vectorizer.contains_term("coolant"));
    }

    #[test]
    fn top_terms_sorted_by_idf() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        vectorizer.build_index(&docs());
        let top = vectorizer.top_terms_by_idf(3);
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        // all df=1 terms tie at ln(2); alphabetical tie-break
        assert_eq!(top[0].0, "battery");
    }
}
