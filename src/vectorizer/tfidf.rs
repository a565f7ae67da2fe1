/// TF-IDF weighting strategy.
///
/// Plugged into `TFIDFVectorizer<E>`; swap it to try other weightings
/// without touching index bookkeeping.
pub trait TFIDFEngine {
    /// IDF for a term seen in `doc_freq` of `doc_num` documents.
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
    /// TF for a term occurring `count` times in a document of `token_sum` tokens.
    fn tf(count: u32, token_sum: u64) -> f64;
}

/// Textbook weighting: `tf = count / len`, `idf = ln(N / (1 + df))`.
///
/// The smoothed IDF goes to zero for a term found in `N - 1` documents and
/// negative for one found in every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (1.0 + doc_freq as f64)).ln()
    }

    #[inline]
    fn tf(count: u32, token_sum: u64) -> f64 {
        if token_sum == 0 {
            return 0.0;
        }
        count as f64 / token_sum as f64
    }
}
