//! Inference engine: preprocess -> vectorize -> classify -> score -> rank -> explain.
//!
//! The engine is an explicit service object. Build one, call
//! [`InferenceEngine::initialize`] (or let the first [`InferenceEngine::query`]
//! do it), then share it behind an `Arc` and serve reads through
//! [`InferenceEngine::query_prepared`]. Rebuilding needs `&mut self`, so the
//! borrow checker keeps it from racing with in-flight queries.
//!
//! Layering note: the vectorizer and classifier refuse to work before they are
//! built, while `query` quietly initializes on first use. Callers that want the
//! strict behavior use `query_prepared`.

pub mod config;
pub mod explain;

use std::{collections::HashSet, sync::Arc, time::Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    classifier::{
        indicators::{first_obd_code, obd_codes},
        CentroidClassifier,
    },
    error::{EngineError, Result},
    knowledge::{Category, DiagnosticCode, KnowledgeBase, KnowledgeEntry},
    preprocess::{display_tokens, preprocess},
    types::{ConfidenceBand, InferenceResult, MatchMethod, MatchResult, SparseVector},
    vectorizer::{
        evaluate::scoring::{
            bm25_score, cosine_similarity, jaccard_similarity, HitEntry, Hits, SimilarityScores,
        },
        token::TokenFrequency,
        TFIDFVectorizer,
    },
};

pub use config::EngineConfig;
use explain::{generate_explanation, ExplanationInput};

/// One corpus document after preprocessing.
#[derive(Debug, Clone)]
struct IndexedDocument {
    id: String,
    freq: TokenFrequency,
    token_set: HashSet<String>,
    vector: SparseVector,
}

/// Everything `initialize` builds. Replaced wholesale on rebuild.
#[derive(Debug, Clone)]
struct EngineState {
    vectorizer: TFIDFVectorizer,
    classifier: CentroidClassifier,
    /// knowledge entries first (same order as the knowledge base), then codes
    documents: Vec<IndexedDocument>,
    avg_doc_length: f64,
}

impl EngineState {
    fn document(&self, id: &str) -> Option<&IndexedDocument> {
        self.documents.iter().find(|d| d.id == id)
    }
}

/// Corpus figures for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineStats {
    pub documents: usize,
    pub knowledge_entries: usize,
    pub diagnostic_codes: usize,
    pub vocabulary_size: usize,
    pub avg_doc_length: f64,
    /// Categories with a trained centroid.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone)]
pub struct InferenceEngine {
    knowledge: Arc<KnowledgeBase>,
    config: EngineConfig,
    state: Option<EngineState>,
}

impl InferenceEngine {
    /// Uninitialized engine over `knowledge`. Rejects a config that fails
    /// [`EngineConfig::validate`].
    pub fn new(knowledge: Arc<KnowledgeBase>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            knowledge,
            config,
            state: None,
        })
    }

    /// Engine over the built-in corpus with default settings.
    pub fn with_builtin_corpus() -> Self {
        Self {
            knowledge: Arc::new(KnowledgeBase::builtin()),
            config: EngineConfig::default(),
            state: None,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.is_some()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge
    }

    /// Index the whole corpus and train the classifier.
    ///
    /// Trouble codes are indexed and scored for IDF but do not train
    /// category centroids. Calling this again rebuilds from scratch.
    pub fn initialize(&mut self) -> Result<()> {
        let started = Instant::now();
        let kb = &self.knowledge;

        let tokenized: Vec<(String, Vec<String>)> = kb
            .entries
            .par_iter()
            .map(|e| (e.id.clone(), preprocess(&e.document_text())))
            .chain(
                kb.codes
                    .par_iter()
                    .map(|c| (c.code.clone(), preprocess(&c.document_text()))),
            )
            .collect();

        let total_len: usize = tokenized.iter().map(|(_, tokens)| tokens.len()).sum();
        let avg_doc_length = if tokenized.is_empty() {
            0.0
        } else {
            total_len as f64 / tokenized.len() as f64
        };

        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        vectorizer.build_index(&tokenized);

        let documents = tokenized
            .into_par_iter()
            .map(|(id, tokens)| -> Result<IndexedDocument> {
                let vector = vectorizer.vectorize(&id, &tokens)?;
                Ok(IndexedDocument {
                    freq: TokenFrequency::from_tokens(&tokens),
                    token_set: tokens.into_iter().collect(),
                    vector,
                    id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut classifier = CentroidClassifier::new(self.config.classifier);
        classifier.build_centroids(
            kb.entries
                .iter()
                .zip(&documents)
                .map(|(entry, doc)| (entry.category, &doc.vector)),
        );

        info!(
            documents = documents.len(),
            vocabulary = vectorizer.vocabulary_size(),
            avg_doc_length,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "inference engine ready"
        );
        self.state = Some(EngineState {
            vectorizer,
            classifier,
            documents,
            avg_doc_length,
        });
        Ok(())
    }

    /// Answer a query, initializing first if needed.
    pub fn query(&mut self, text: &str, top_k: usize) -> Result<InferenceResult> {
        if !self.is_ready() {
            self.initialize()?;
        }
        self.query_prepared(text, top_k)
    }

    /// [`InferenceEngine::query`] with the configured default result count.
    pub fn query_default(&mut self, text: &str) -> Result<InferenceResult> {
        self.query(text, self.config.default_top_k)
    }

    /// Answer a query against an already initialized engine.
    pub fn query_prepared(&self, text: &str, top_k: usize) -> Result<InferenceResult> {
        let started = Instant::now();
        let state = self.state.as_ref().ok_or(EngineError::NotInitialized {
            component: "inference engine",
        })?;

        let exact = first_obd_code(text)
            .and_then(|code| self.knowledge.code(code))
            .map(exact_match);
        if let Some(m) = &exact {
            debug!(code = %m.entry.id, "query names a known trouble code");
        }

        let stemmed = preprocess(text);
        let shown = display_tokens(text);
        let query_set: HashSet<String> = stemmed.iter().cloned().collect();

        let query_vector = state.vectorizer.vectorize("query", &stemmed)?;
        let classification = state.classifier.classify(&query_vector, text)?;

        let mut hits = self.score_entries(state, &stemmed, &query_set, &query_vector);
        hits.fuse(self.config.fusion).sort_by_score();

        // slice to top_k first, then apply the floor: may return fewer than top_k
        let ranked: Vec<MatchResult> = hits
            .list
            .iter()
            .take(top_k)
            .filter(|hit| hit.scores.combined > self.config.score_floor)
            .map(|hit| {
                let entry = &self.knowledge.entries[hit.key];
                ranked_match(entry, hit.scores.combined, &query_set)
            })
            .collect();

        let matches = merge_channels(exact, ranked, top_k);
        if matches.is_empty() {
            warn!(query = text, "no matches above the score floor");
        }

        let top_match = matches.first();
        let explanation = generate_explanation(ExplanationInput {
            top_match,
            classification: &classification,
            top_scores: hits.first().map(|hit| hit.scores),
            display_tokens: &shown,
            stemmed_tokens: &stemmed,
            matched_document: top_match
                .and_then(|m| state.document(&m.entry.id))
                .map(|doc| &doc.freq),
            exact_match_confidence: self.config.exact_match_confidence,
        });

        let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            top_k,
            returned = matches.len(),
            category = %classification.category,
            processing_time_ms,
            "query answered"
        );
        Ok(InferenceResult {
            query: text.to_string(),
            matches,
            classification,
            explanation,
            processing_time_ms,
        })
    }

    /// Cosine, BM25 and Jaccard for every knowledge entry. Codes are not ranked.
    fn score_entries(
        &self,
        state: &EngineState,
        stemmed: &[String],
        query_set: &HashSet<String>,
        query_vector: &SparseVector,
    ) -> Hits {
        let entry_count = self.knowledge.entries.len();
        let idf = |term: &str| state.vectorizer.get_idf(term).unwrap_or(0.0);
        let list: Vec<HitEntry> = state.documents[..entry_count]
            .par_iter()
            .enumerate()
            .map(|(key, doc)| HitEntry {
                key,
                scores: SimilarityScores {
                    cosine: cosine_similarity(query_vector, &doc.vector),
                    bm25: bm25_score(
                        stemmed,
                        &doc.freq,
                        idf,
                        state.avg_doc_length,
                        self.config.bm25,
                    ),
                    jaccard: jaccard_similarity(query_set, &doc.token_set),
                    combined: 0.0,
                },
            })
            .collect();
        Hits::new(list)
    }

    /// Known trouble codes mentioned anywhere in `text`, first mention order.
    pub fn search_codes(&self, text: &str) -> Vec<&DiagnosticCode> {
        let mut found: Vec<&DiagnosticCode> = Vec::new();
        for candidate in obd_codes(text) {
            if let Some(code) = self.knowledge.code(candidate) {
                if !found.iter().any(|c| c.code == code.code) {
                    found.push(code);
                }
            }
        }
        found
    }

    pub fn stats(&self) -> Result<EngineStats> {
        let state = self.state.as_ref().ok_or(EngineError::NotInitialized {
            component: "inference engine",
        })?;
        Ok(EngineStats {
            documents: state.documents.len(),
            knowledge_entries: self.knowledge.entries.len(),
            diagnostic_codes: self.knowledge.codes.len(),
            vocabulary_size: state.vectorizer.vocabulary_size(),
            avg_doc_length: state.avg_doc_length,
            categories: state.classifier.categories(),
        })
    }

    /// Terms ranked by IDF, rarest first.
    pub fn rare_terms(&self, n: usize) -> Vec<(String, f64)> {
        self.state
            .as_ref()
            .map(|s| s.vectorizer.top_terms_by_idf(n))
            .unwrap_or_default()
    }
}

fn exact_match(code: &DiagnosticCode) -> MatchResult {
    MatchResult {
        entry: code.to_entry(),
        relevance_score: 1.0,
        method: MatchMethod::ExactObdMatch,
        matched_keywords: vec![code.code.clone()],
        confidence: ConfidenceBand::High,
    }
}

/// Curated keywords whose own stems meet the query's stems.
fn matched_keywords(entry: &KnowledgeEntry, query_set: &HashSet<String>) -> Vec<String> {
    entry
        .keywords
        .iter()
        .filter(|keyword| preprocess(keyword).iter().any(|stem| query_set.contains(stem)))
        .cloned()
        .collect()
}

fn ranked_match(entry: &KnowledgeEntry, score: f64, query_set: &HashSet<String>) -> MatchResult {
    MatchResult {
        entry: entry.clone(),
        relevance_score: score,
        method: MatchMethod::HybridSimilarity,
        matched_keywords: matched_keywords(entry, query_set),
        confidence: ConfidenceBand::from_score(score),
    }
}

/// Merge the exact-code channel with the ranked channel.
///
/// An exact match, when present, always takes the first slot and the ranked
/// list fills the remaining `top_k - 1`. With `top_k == 0` nothing is returned.
fn merge_channels(
    exact: Option<MatchResult>,
    ranked: Vec<MatchResult>,
    top_k: usize,
) -> Vec<MatchResult> {
    let mut merged = Vec::with_capacity(top_k.min(ranked.len() + 1));
    merged.extend(exact);
    merged.extend(ranked);
    merged.truncate(top_k);
    merged
}
