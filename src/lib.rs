/// This crate is a vehicle diagnostic retrieval engine built on a TF-IDF vectorizer.
pub mod classifier;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod knowledge;
pub mod preprocess;
pub mod types;
pub mod utils;
pub mod vectorizer;

/// Inference Engine
/// The top-level struct of this crate. It owns a knowledge base and, once
/// initialized, everything built from it:
/// - A TF-IDF index over every knowledge entry and trouble code
/// - Token frequencies and token sets for BM25 and Jaccard scoring
/// - A nearest-centroid category classifier
///
/// A query runs the pipeline
/// preprocess -> vectorize -> classify -> score -> rank -> explain
/// and returns an `InferenceResult`.
///
/// A query that names a known trouble code (e.g. `P0420`) gets that code as
/// an exact match in the first slot, ahead of the ranked results.
///
/// # Concurrency
/// `query` needs `&mut self` because it initializes on first use.
/// `query_prepared` only reads, so an initialized engine can be shared
/// across threads behind an `Arc`.
pub use engine::InferenceEngine;

/// Engine configuration
/// Every tunable the pipeline reads: default result count, BM25 parameters,
/// fusion weights, score floor and classifier boosts.
/// Deserializable from JSON with per-field defaults.
pub use engine::EngineConfig;

/// Engine errors
/// Using an index or classifier before it is built, or loading a bad config.
pub use error::{EngineError, Result};

/// Knowledge Base
/// Curated automotive knowledge entries plus the trouble code database.
/// `KnowledgeBase::builtin()` gives the bundled corpus.
pub use knowledge::{Category, DiagnosticCode, KnowledgeBase, KnowledgeEntry, Severity};

/// Query results
/// `InferenceResult` is what a query returns; everything in it serializes
/// with serde.
pub use types::{
    ClassificationResult, ConfidenceBand, Explanation, InferenceResult, MatchMethod, MatchResult,
    SparseVector,
};

/// Evaluation harness
/// Runs labeled queries through an engine and reports precision, recall,
/// F1 and category accuracy.
pub use evaluation::{run_evaluation, run_evaluation_with, EvaluationSummary, TestCase};

/// TF-IDF Vectorizer
/// Builds document frequencies and a cached IDF table from a fixed set of
/// tokenized documents, then turns token lists into sparse TF-IDF vectors.
///
/// `TFIDFVectorizer<E>` is generic over the calculation engine `E`
/// (default `DefaultTFIDFEngine`).
///
/// Building is all-or-nothing. Vectorizing before the index is built is an
/// error, not an empty vector.
pub use vectorizer::TFIDFVectorizer;

/// Corpus for TF-IDF Vectorizer
/// This struct manages document frequencies for a collection of documents.
/// It does not store document text or IDs; it only manages:
/// - The number of documents
/// - The number of documents in which each token appears across the corpus
///
/// It is used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::Corpus;

/// Token Frequency structure
/// A struct for analyzing/managing token occurrence frequency within a document.
/// It manages:
/// - The count of occurrences of each token
/// - The total number of tokens in the document
///
/// Used as base data for TF (Term Frequency) and BM25 calculation.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `TFIDFVectorizer<E>`.
/// The default implementation, `DefaultTFIDFEngine`, uses
/// `tf = count / len` and `idf = ln(N / (1 + df))`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Search Hits and Hit Entry structures
/// Data structures for managing scored candidates.
/// - `Hits`: holds the candidate list, fuses the metric scores and sorts by score
/// - `HitEntry`: a single candidate, holding the entry position and its scores
pub use vectorizer::evaluate::scoring::{HitEntry, Hits, SimilarityScores};
