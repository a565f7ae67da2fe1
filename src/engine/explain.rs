use crate::{
    types::{
        ClassificationResult, Explanation, MatchMethod, MatchResult, MetricScore,
        SimilarityBreakdown, TokenOverlap,
    },
    utils::math::safe_ratio,
    vectorizer::{
        evaluate::scoring::{SimilarityScores, BM25_FORMULA, COSINE_FORMULA, JACCARD_FORMULA},
        token::TokenFrequency,
    },
};

/// Everything explanation building needs from one query run.
pub struct ExplanationInput<'a> {
    pub top_match: Option<&'a MatchResult>,
    pub classification: &'a ClassificationResult,
    /// Scores of the best ranked knowledge entry, even when an exact code
    /// match took the first slot.
    pub top_scores: Option<SimilarityScores>,
    /// Stop-word filtered query tokens before stemming.
    pub display_tokens: &'a [String],
    pub stemmed_tokens: &'a [String],
    /// Stemmed tokens of the top match's indexed document.
    pub matched_document: Option<&'a TokenFrequency>,
    pub exact_match_confidence: f64,
}

fn confidence_of(top: Option<&MatchResult>, exact_match_confidence: f64) -> (f64, String) {
    match top {
        None => (0.0, "No matching entries found".to_string()),
        Some(m) if m.method == MatchMethod::ExactObdMatch => (
            exact_match_confidence,
            "Exact diagnostic trouble code match".to_string(),
        ),
        Some(m) => {
            let score = m.relevance_score;
            let reason = if score > 0.3 {
                "Strong overlap between the query and the matched entry"
            } else if score > 0.15 {
                "Moderate overlap between the query and the matched entry"
            } else {
                "Low overlap; the match may only be loosely related"
            };
            (score, reason.to_string())
        }
    }
}

/// Stemmed query tokens found in the matched document, first occurrence only.
///
/// The displayed `query_tokens` are the unstemmed words while the overlap is
/// computed on stems, so a displayed word and its matched stem may differ.
fn token_overlap(input: &ExplanationInput<'_>) -> TokenOverlap {
    let mut unique: Vec<&String> = Vec::with_capacity(input.stemmed_tokens.len());
    for token in input.stemmed_tokens {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }
    let matched_tokens: Vec<String> = match input.matched_document {
        Some(doc) => unique
            .iter()
            .filter(|t| doc.contains_token(t))
            .map(|t| t.to_string())
            .collect(),
        None => Vec::new(),
    };
    let overlap_ratio = safe_ratio(matched_tokens.len() as f64, unique.len() as f64);
    TokenOverlap {
        query_tokens: input.display_tokens.to_vec(),
        matched_tokens,
        overlap_ratio,
    }
}

pub fn generate_explanation(input: ExplanationInput<'_>) -> Explanation {
    let classification = input.classification;
    let (confidence_score, confidence_reason) =
        confidence_of(input.top_match, input.exact_match_confidence);

    let mut reasoning = Vec::new();
    let summary = match input.top_match {
        None => "No relevant entries found for this query.".to_string(),
        Some(m) => {
            if m.method == MatchMethod::ExactObdMatch {
                reasoning.push(format!(
                    "Query contains trouble code {}, matched directly against the code database",
                    m.entry.id
                ));
            }
            if !m.matched_keywords.is_empty() {
                reasoning.push(format!("Matched keywords: {}", m.matched_keywords.join(", ")));
            }
            match m.method {
                MatchMethod::ExactObdMatch => format!("Recognized trouble code {}", m.entry.title),
                MatchMethod::HybridSimilarity => {
                    format!("Best match: {} ({})", m.entry.title, m.entry.category.label())
                }
            }
        }
    };
    reasoning.push(format!(
        "Query classified as {} with {:.0}% confidence",
        classification.category.label(),
        classification.confidence * 100.0
    ));
    if let Some(m) = input.top_match {
        reasoning.push(format!("Severity of top match: {}", m.entry.severity));
    }

    let similarity_metrics = input.top_scores.map(|s| SimilarityBreakdown {
        cosine: MetricScore {
            score: s.cosine,
            formula: COSINE_FORMULA,
        },
        bm25: MetricScore {
            score: s.bm25,
            formula: BM25_FORMULA,
        },
        jaccard: MetricScore {
            score: s.jaccard,
            formula: JACCARD_FORMULA,
        },
        combined: s.combined,
    });

    let token_overlap = token_overlap(&input);
    Explanation {
        summary,
        reasoning,
        confidence_score,
        confidence_reason,
        similarity_metrics,
        token_overlap,
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::knowledge::{Category, KnowledgeEntry, Severity};
    use crate::types::ConfidenceBand;

    fn classification() -> ClassificationResult {
        ClassificationResult {
            category: Category::DiagnosticPattern,
            confidence: 0.42,
            scores: IndexMap::new(),
        }
    }

    fn ranked(score: f64) -> MatchResult {
        MatchResult {
            entry: KnowledgeEntry {
                id: "dp-test".into(),
                category: Category::DiagnosticPattern,
                title: "Test Entry".into(),
                content: String::new(),
                keywords: vec!["coolant".into()],
                severity: Severity::High,
                related_components: Vec::new(),
            },
            relevance_score: score,
            method: MatchMethod::HybridSimilarity,
            matched_keywords: vec!["coolant".into()],
            confidence: ConfidenceBand::from_score(score),
        }
    }

    fn input<'a>(
        top: Option<&'a MatchResult>,
        classification: &'a ClassificationResult,
        display: &'a [String],
        stemmed: &'a [String],
        doc: Option<&'a TokenFrequency>,
    ) -> ExplanationInput<'a> {
        ExplanationInput {
            top_match: top,
            classification,
            top_scores: None,
            display_tokens: display,
            stemmed_tokens: stemmed,
            matched_document: doc,
            exact_match_confidence: 0.98,
        }
    }

    #[test]
    fn confidence_reason_follows_score_bands() {
        let c = classification();
        for (score, needle) in [(0.5, "Strong"), (0.2, "Moderate"), (0.05, "Low")] {
            let m = ranked(score);
            let e = generate_explanation(input(Some(&m), &c, &[], &[], None));
            assert_eq!(e.confidence_score, score);
            assert!(e.confidence_reason.starts_with(needle));
        }
    }

    #[test]
    fn reasoning_cites_keywords_category_and_severity() {
        let c = classification();
        let m = ranked(0.4);
        let e = generate_explanation(input(Some(&m), &c, &[], &[], None));
        assert_eq!(e.summary, "Best match: Test Entry (Diagnostic Pattern)");
        assert_eq!(
            e.reasoning,
            vec![
                "Matched keywords: coolant".to_string(),
                "Query classified as Diagnostic Pattern with 42% confidence".to_string(),
                "Severity of top match: high".to_string(),
            ]
        );
    }

    #[test]
    fn no_match_explanation() {
        let c = classification();
        let e = generate_explanation(input(None, &c, &[], &[], None));
        assert_eq!(e.confidence_score, 0.0);
        assert!(e.similarity_metrics.is_none());
        assert_eq!(e.reasoning.len(), 1);
    }

    #[test]
    fn overlap_uses_stems_but_displays_raw_words() {
        let c = classification();
        let m = ranked(0.4);
        let display: Vec<String> = vec!["overheating".into(), "highway".into()];
        let stemmed: Vec<String> = vec!["overheate".into(), "highway".into()];
        let doc = TokenFrequency::from_tokens(&["engine", "overheate", "coolant"]);
        let e = generate_explanation(input(Some(&m), &c, &display, &stemmed, Some(&doc)));
        assert_eq!(e.token_overlap.query_tokens, display);
        assert_eq!(e.token_overlap.matched_tokens, vec!["overheate".to_string()]);
        assert_eq!(e.token_overlap.overlap_ratio, 0.5);
    }
}
