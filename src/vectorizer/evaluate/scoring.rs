use std::{collections::HashSet, fmt::Debug, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::{types::SparseVector, vectorizer::token::TokenFrequency};

/// BM25 tuning parameters.
/// k1: term frequency saturation
/// b: document length normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Weights of the fused relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub cosine: f64,
    pub bm25: f64,
    pub jaccard: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            cosine: 0.45,
            bm25: 0.40,
            jaccard: 0.15,
        }
    }
}

/// Display formulas shown next to each metric in explanations.
pub const COSINE_FORMULA: &str = "cos(q, d) = (q . d) / (|q| * |d|)";
pub const BM25_FORMULA: &str =
    "BM25 = sum idf(t) * f(t,d) * (k1 + 1) / (f(t,d) + k1 * (1 - b + b * |d| / avgdl))";
pub const JACCARD_FORMULA: &str = "J(Q, D) = |Q intersect D| / |Q union D|";

/// Cosine similarity
/// cosθ = A・B / (|A||B|)
///
/// Zero when either side has zero magnitude. Walks the shorter vector and
/// probes the longer one.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.magnitude() == 0.0 || b.magnitude() == 0.0 {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .map(|(term, w)| w * large.weight(term))
        .sum();
    dot / (a.magnitude() * b.magnitude())
}

/// Okapi BM25 of `doc` against `query_terms`.
///
/// Repeated query terms contribute once per occurrence. Terms missing from
/// the document contribute nothing; an empty query or document scores 0.
pub fn bm25_score<T, F>(
    query_terms: &[T],
    doc: &TokenFrequency,
    idf: F,
    avg_doc_length: f64,
    params: Bm25Params,
) -> f64
where
    T: AsRef<str>,
    F: Fn(&str) -> f64,
{
    if query_terms.is_empty() || doc.token_sum() == 0 {
        return 0.0;
    }
    let Bm25Params { k1, b } = params;
    let len_p = if avg_doc_length > 0.0 {
        doc.token_sum() as f64 / avg_doc_length
    } else {
        1.0
    };
    query_terms
        .iter()
        .map(|term| {
            let term = term.as_ref();
            let freq = doc.token_count(term) as f64;
            if freq == 0.0 {
                return 0.0;
            }
            // BM25 scoring formula
            idf(term) * (freq * (k1 + 1.0)) / (freq + k1 * (1.0 - b + b * len_p))
        })
        .sum()
}

/// |A ∩ B| / |A ∪ B|, defined as 0 when both sets are empty.
pub fn jaccard_similarity<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Weighted fusion of the three metrics.
///
/// BM25 is scaled by the best BM25 of the current result set, so the same
/// document can fuse to a different value under a different query.
pub fn combined_score(
    cosine: f64,
    bm25: f64,
    jaccard: f64,
    max_bm25: f64,
    weights: FusionWeights,
) -> f64 {
    let bm25_norm = if max_bm25 == 0.0 { 0.0 } else { bm25 / max_bm25 };
    weights.cosine * cosine + weights.bm25 * bm25_norm + weights.jaccard * jaccard
}

/// Per-metric scores of one candidate document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SimilarityScores {
    pub cosine: f64,
    pub bm25: f64,
    pub jaccard: f64,
    pub combined: f64,
}

/// One scored candidate: position of the entry in the knowledge base plus its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub key: usize,
    pub scores: SimilarityScores,
}

/// Structure to store search results
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Highest BM25 in the set, never below 0.
    pub fn max_bm25(&self) -> f64 {
        self.list
            .iter()
            .fold(0.0_f64, |max, hit| if hit.scores.bm25 > max { hit.scores.bm25 } else { max })
    }

    /// Fill in `combined` now that the set-wide BM25 maximum is known.
    pub fn fuse(&mut self, weights: FusionWeights) -> &mut Self {
        let max_bm25 = self.max_bm25();
        for hit in &mut self.list {
            let s = &mut hit.scores;
            s.combined = combined_score(s.cosine, s.bm25, s.jaccard, max_bm25, weights);
        }
        self
    }

    /// Sort results by descending combined score.
    /// Stable: equal scores keep corpus order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.scores.combined.is_nan());
        self.list
            .sort_by(|a, b| b.scores.combined.total_cmp(&a.scores.combined));
        self
    }

    pub fn first(&self) -> Option<&HitEntry> {
        self.list.first()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6}", hit.key, hit.scores.combined)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> SparseVector {
        let weights: IndexMap<String, f64> =
            pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect();
        SparseVector::from_weights("v", weights)
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cosine_self_similarity_is_one() {
        let v = vector(&[("brake", 0.4), ("rotor", 1.2), ("squeal", 0.3)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        let v = vector(&[("brake", 0.4)]);
        let zero = vector(&[]);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn cosine_is_symmetric_and_orthogonal_is_zero() {
        let a = vector(&[("brake", 1.0), ("rotor", 2.0)]);
        let b = vector(&[("rotor", 1.0), ("caliper", 3.0), ("pad", 1.0)]);
        let c = vector(&[("coolant", 1.0)]);
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-15);
        assert_eq!(cosine_similarity(&a, &c), 0.0);
    }

    #[test]
    fn bm25_empty_inputs_score_zero() {
        let doc = TokenFrequency::from_tokens(&["brake", "rotor"]);
        let empty_query: [&str; 0] = [];
        assert_eq!(bm25_score(&empty_query, &doc, |_| 1.0, 2.0, Bm25Params::default()), 0.0);
        assert_eq!(
            bm25_score(&["brake"], &TokenFrequency::new(), |_| 1.0, 2.0, Bm25Params::default()),
            0.0
        );
    }

    #[test]
    fn bm25_matches_hand_computation() {
        let doc = TokenFrequency::from_tokens(&["brake", "brake", "rotor", "pad"]);
        let score = bm25_score(&["brake", "clutch"], &doc, |_| 2.0, 4.0, Bm25Params::default());
        // f=2, |d|=avgdl -> 2 * 2 * 2.5 / (2 + 1.5)
        assert!((score - 2.0 * 2.0 * 2.5 / 3.5).abs() < 1e-12);
    }

    #[test]
    fn bm25_saturates_with_frequency() {
        let mut prev = 0.0;
        for freq in 1..20 {
            let mut tokens = vec!["filler"; 20 - freq];
            tokens.extend(std::iter::repeat("brake").take(freq));
            let doc = TokenFrequency::from_tokens(&tokens);
            let score = bm25_score(&["brake"], &doc, |_| 1.0, 20.0, Bm25Params::default());
            assert!(score >= prev);
            assert!(score < 2.5);
            prev = score;
        }
    }

    #[test]
    fn jaccard_edge_cases() {
        let a = set(&["coolant", "leak"]);
        assert_eq!(jaccard_similarity(&a, &a), 1.0);
        assert_eq!(jaccard_similarity(&set(&[]), &set(&[])), 0.0);
        let b = set(&["coolant", "thermostat", "fan"]);
        assert!((jaccard_similarity(&a, &b) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn combined_uses_result_set_max() {
        let w = FusionWeights::default();
        assert!((combined_score(1.0, 2.0, 1.0, 4.0, w) - (0.45 + 0.2 + 0.15)).abs() < 1e-12);
        assert!((combined_score(1.0, 2.0, 1.0, 2.0, w) - 1.0).abs() < 1e-12);
        assert!((combined_score(0.5, 3.0, 0.0, 0.0, w) - 0.225).abs() < 1e-12);
    }

    #[test]
    fn hits_fuse_then_sort_stably() {
        let hit = |key, cosine, bm25| HitEntry {
            key,
            scores: SimilarityScores { cosine, bm25, jaccard: 0.0, combined: 0.0 },
        };
        let mut hits = Hits::new(vec![hit(0, 0.1, 1.0), hit(1, 0.5, 4.0), hit(2, 0.1, 1.0)]);
        hits.fuse(FusionWeights::default()).sort_by_score();
        let keys: Vec<usize> = hits.list.iter().map(|h| h.key).collect();
        assert_eq!(keys, vec![1, 0, 2]);
        assert!((hits.list[0].scores.combined - (0.45 * 0.5 + 0.40)).abs() < 1e-12);
    }
}
