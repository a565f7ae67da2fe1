//! Shared record types passed between the vectorizer, classifier and engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::knowledge::{Category, KnowledgeEntry};

/// Sparse term -> weight vector with its Euclidean magnitude cached.
///
/// Absent terms weigh zero. The magnitude always equals `sqrt(sum(w^2))`
/// over the stored weights; mutate only through [`SparseVector::from_weights`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub id: String,
    weights: IndexMap<String, f64>,
    magnitude: f64,
}

impl SparseVector {
    pub fn from_weights(id: impl Into<String>, weights: IndexMap<String, f64>) -> Self {
        let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self {
            id: id.into(),
            weights,
            magnitude,
        }
    }

    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }
}

/// Output of the nearest-centroid classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Best score over the sum of all scores, in [0, 1].
    pub confidence: f64,
    pub scores: IndexMap<Category, f64>,
}

/// How a match entered the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Diagnostic trouble code named verbatim in the query.
    ExactObdMatch,
    /// Fused cosine + BM25 + Jaccard ranking.
    HybridSimilarity,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::ExactObdMatch => "exact_obd_match",
            MatchMethod::HybridSimilarity => "hybrid_similarity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// > 0.3 high, > 0.15 medium, anything else low.
    pub fn from_score(score: f64) -> Self {
        if score > 0.3 {
            ConfidenceBand::High
        } else if score > 0.15 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub entry: KnowledgeEntry,
    pub relevance_score: f64,
    pub method: MatchMethod,
    pub matched_keywords: Vec<String>,
    pub confidence: ConfidenceBand,
}

/// One similarity metric as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub score: f64,
    pub formula: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub cosine: MetricScore,
    pub bm25: MetricScore,
    pub jaccard: MetricScore,
    pub combined: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenOverlap {
    /// Tokenized, stopword-filtered query words before stemming.
    pub query_tokens: Vec<String>,
    /// Stemmed query tokens that occur in the top match's document.
    pub matched_tokens: Vec<String>,
    pub overlap_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub summary: String,
    pub reasoning: Vec<String>,
    pub confidence_score: f64,
    pub confidence_reason: String,
    pub similarity_metrics: Option<SimilarityBreakdown>,
    pub token_overlap: TokenOverlap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    pub query: String,
    pub matches: Vec<MatchResult>,
    pub classification: ClassificationResult,
    pub explanation: Explanation,
    pub processing_time_ms: f64,
}

impl InferenceResult {
    /// Ids of the returned matches, in rank order.
    pub fn match_ids(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.entry.id.as_str()).collect()
    }

    pub fn top_match(&self) -> Option<&MatchResult> {
        self.matches.first()
    }
}
