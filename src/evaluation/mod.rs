//! Scores the full pipeline against labeled queries.

mod fixtures;

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    engine::InferenceEngine,
    error::Result,
    knowledge::Category,
    utils::math::{harmonic_mean, mean, safe_ratio},
};

pub use fixtures::builtin_test_cases;

/// Result count every evaluated query runs with.
pub const EVALUATION_TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub query: String,
    pub expected_category: Category,
    pub expected_top_matches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub test_case: TestCase,
    pub actual_category: Category,
    pub actual_matches: Vec<String>,
    pub category_correct: bool,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Category right and at least one expected entry retrieved.
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub accuracy: f64,
    pub avg_precision: f64,
    pub avg_recall: f64,
    pub avg_f1: f64,
    pub results: Vec<EvaluationResult>,
}

/// Run one labeled query and score it.
pub fn evaluate_test_case(
    engine: &mut InferenceEngine,
    test_case: &TestCase,
) -> Result<EvaluationResult> {
    let result = engine.query(&test_case.query, EVALUATION_TOP_K)?;
    let actual_matches: Vec<String> = result
        .matches
        .iter()
        .map(|m| m.entry.id.clone())
        .collect();

    let expected: HashSet<&str> = test_case
        .expected_top_matches
        .iter()
        .map(String::as_str)
        .collect();
    let actual: HashSet<&str> = actual_matches.iter().map(String::as_str).collect();
    let true_positives = expected.intersection(&actual).count() as f64;

    let precision = safe_ratio(true_positives, actual.len() as f64);
    let recall = safe_ratio(true_positives, expected.len() as f64);
    let f1 = harmonic_mean(precision, recall);
    let category_correct = result.classification.category == test_case.expected_category;

    Ok(EvaluationResult {
        test_case: test_case.clone(),
        actual_category: result.classification.category,
        actual_matches,
        category_correct,
        precision,
        recall,
        f1,
        passed: category_correct && recall > 0.0,
    })
}

/// Run the built-in labeled queries.
pub fn run_evaluation(engine: &mut InferenceEngine) -> Result<EvaluationSummary> {
    run_evaluation_with(engine, &builtin_test_cases())
}

pub fn run_evaluation_with(
    engine: &mut InferenceEngine,
    cases: &[TestCase],
) -> Result<EvaluationSummary> {
    let results = cases
        .iter()
        .map(|case| evaluate_test_case(engine, case))
        .collect::<Result<Vec<_>>>()?;

    let total_tests = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let precisions: Vec<f64> = results.iter().map(|r| r.precision).collect();
    let recalls: Vec<f64> = results.iter().map(|r| r.recall).collect();
    let f1s: Vec<f64> = results.iter().map(|r| r.f1).collect();

    let summary = EvaluationSummary {
        total_tests,
        passed,
        failed: total_tests - passed,
        accuracy: safe_ratio(passed as f64, total_tests as f64),
        avg_precision: mean(&precisions),
        avg_recall: mean(&recalls),
        avg_f1: mean(&f1s),
        results,
    };
    info!(
        total = summary.total_tests,
        passed = summary.passed,
        accuracy = summary.accuracy,
        avg_f1 = summary.avg_f1,
        "evaluation finished"
    );
    Ok(summary)
}

impl fmt::Display for EvaluationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} passed ({:.1}% accuracy)",
            self.passed,
            self.total_tests,
            self.accuracy * 100.0
        )?;
        writeln!(
            f,
            "precision {:.3}  recall {:.3}  f1 {:.3}",
            self.avg_precision, self.avg_recall, self.avg_f1
        )?;
        for r in &self.results {
            writeln!(
                f,
                "  [{}] {} {:?} -> {} (expected {}), p={:.2} r={:.2}",
                if r.passed { "PASS" } else { "FAIL" },
                r.test_case.id,
                r.test_case.query,
                r.actual_category,
                r.test_case.expected_category,
                r.precision,
                r.recall
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(query: &str, category: Category, expected: &[&str]) -> TestCase {
        TestCase {
            id: "t".into(),
            query: query.into(),
            expected_category: category,
            expected_top_matches: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn exact_code_case_scores_full_recall() {
        let mut engine = InferenceEngine::with_builtin_corpus();
        let test_case = case("P0420", Category::ObdCode, &["P0420"]);
        let result = evaluate_test_case(&mut engine, &test_case).unwrap();
        assert!(result.category_correct);
        assert_eq!(result.recall, 1.0);
        assert!(result.precision > 0.0 && result.precision <= 1.0);
        assert!(result.passed);
    }

    #[test]
    fn no_expected_ids_means_zero_recall_and_failure() {
        let mut engine = InferenceEngine::with_builtin_corpus();
        let test_case = case("P0420", Category::ObdCode, &[]);
        let result = evaluate_test_case(&mut engine, &test_case).unwrap();
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.f1, 0.0);
        assert!(!result.passed);
    }

    #[test]
    fn wrong_category_fails_even_with_recall() {
        let mut engine = InferenceEngine::with_builtin_corpus();
        let result =
            evaluate_test_case(&mut engine, &case("P0420", Category::Faq, &["P0420"])).unwrap();
        assert!(!result.category_correct);
        assert!(!result.passed);
    }

    #[test]
    fn empty_suite_summarizes_to_zero() {
        let mut engine = InferenceEngine::with_builtin_corpus();
        let summary = run_evaluation_with(&mut engine, &[]).unwrap();
        assert_eq!(summary.total_tests, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.avg_f1, 0.0);
    }
}
