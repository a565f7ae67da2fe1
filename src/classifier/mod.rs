//! Nearest-centroid category classifier with lexical boosts.

pub mod indicators;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{EngineError, Result},
    knowledge::Category,
    types::{ClassificationResult, SparseVector},
    utils::math::{clamp_unit, safe_ratio},
    vectorizer::evaluate::scoring::cosine_similarity,
};

use indicators::{first_obd_code, indicator_hits};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Added per indicator hit.
    pub indicator_step: f64,
    /// Ceiling of the summed indicator boost.
    pub indicator_cap: f64,
    /// Added to `obd_code` when the text contains a trouble code.
    pub obd_code_boost: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            indicator_step: 0.08,
            indicator_cap: 0.3,
            obd_code_boost: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CentroidClassifier {
    config: ClassifierConfig,
    centroids: Option<IndexMap<Category, SparseVector>>,
}

impl CentroidClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            centroids: None,
        }
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.centroids.is_some()
    }

    /// Categories that received at least one training vector, in `Category::ALL` order.
    pub fn categories(&self) -> Vec<Category> {
        self.centroids
            .as_ref()
            .map(|c| c.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn centroid(&self, category: Category) -> Option<&SparseVector> {
        self.centroids.as_ref()?.get(&category)
    }

    /// Average the labeled vectors of each category into one centroid.
    ///
    /// Every term seen in any member is a dimension; members lacking it
    /// count as zero. Rebuilding replaces the previous centroids.
    pub fn build_centroids<'a, I>(&mut self, labeled: I)
    where
        I: IntoIterator<Item = (Category, &'a SparseVector)>,
    {
        let mut groups: IndexMap<Category, Vec<&SparseVector>> = IndexMap::new();
        for (category, vector) in labeled {
            groups.entry(category).or_default().push(vector);
        }
        groups.sort_keys();

        let centroids: IndexMap<Category, SparseVector> = groups
            .into_iter()
            .map(|(category, members)| {
                let mut sums: IndexMap<String, f64> = IndexMap::new();
                for vector in &members {
                    for (term, weight) in vector.iter() {
                        *sums.entry(term.to_string()).or_insert(0.0) += weight;
                    }
                }
                let n = members.len() as f64;
                sums.values_mut().for_each(|w| *w /= n);
                let centroid = SparseVector::from_weights(format!("centroid:{category}"), sums);
                debug!(
                    %category,
                    members = members.len(),
                    terms = centroid.len(),
                    "built centroid"
                );
                (category, centroid)
            })
            .collect();
        self.centroids = Some(centroids);
    }

    /// Score every centroid against the query and pick the best.
    ///
    /// score = cosine(query, centroid)
    ///       + min(indicator hits * step, cap)
    ///       + obd boost (obd_code only, when the text names a trouble code)
    ///
    /// Ties go to the earlier category. If no centroid was built the result
    /// falls back to the first category with zero confidence.
    pub fn classify(&self, query: &SparseVector, text: &str) -> Result<ClassificationResult> {
        let centroids = self.centroids.as_ref().ok_or(EngineError::NotInitialized {
            component: "category classifier",
        })?;
        let ClassifierConfig {
            indicator_step,
            indicator_cap,
            obd_code_boost,
        } = self.config;

        let lowered = text.to_lowercase();
        let names_code = first_obd_code(&lowered).is_some();

        let scores: IndexMap<Category, f64> = centroids
            .iter()
            .map(|(category, centroid)| {
                let hits = indicator_hits(*category, &lowered);
                let mut score = cosine_similarity(query, centroid);
                score += (hits as f64 * indicator_step).min(indicator_cap);
                if *category == Category::ObdCode && names_code {
                    score += obd_code_boost;
                }
                (*category, score)
            })
            .collect();

        let mut best: Option<(Category, f64)> = None;
        for (category, score) in &scores {
            if best.map_or(true, |(_, b)| *score > b) {
                best = Some((*category, *score));
            }
        }
        let (category, best_score) = best.unwrap_or((Category::ALL[0], 0.0));
        let total: f64 = scores.values().sum();
        let confidence = clamp_unit(safe_ratio(best_score, total));

        debug!(%category, confidence, "classified query");
        Ok(ClassificationResult {
            category,
            confidence,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(id: &str, pairs: &[(&str, f64)]) -> SparseVector {
        SparseVector::from_weights(id, pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect())
    }

    fn trained() -> CentroidClassifier {
        let brakes = vector("b", &[("brake", 1.0), ("squeal", 1.0)]);
        let rotors = vector("r", &[("brake", 1.0), ("rotor", 2.0)]);
        let oil = vector("o", &[("engine_oil", 1.0), ("interval", 1.0)]);
        let codes = vector("c", &[("scanner", 1.0)]);
        let mut classifier = CentroidClassifier::default();
        classifier.build_centroids([
            (Category::DiagnosticPattern, &brakes),
            (Category::MaintenanceGuide, &oil),
            (Category::DiagnosticPattern, &rotors),
            (Category::ObdCode, &codes),
        ]);
        classifier
    }

    #[test]
    fn classify_before_build_fails_loudly() {
        let classifier = CentroidClassifier::default();
        let err = classifier.classify(&vector("q", &[("brake", 1.0)]), "brake").unwrap_err();
        assert!(matches!(err, EngineError::NotInitialized { .. }));
    }

    #[test]
    fn centroid_is_dimension_wise_mean() {
        let classifier = trained();
        let centroid = classifier.centroid(Category::DiagnosticPattern).unwrap();
        assert_eq!(centroid.weight("brake"), 1.0);
        assert_eq!(centroid.weight("squeal"), 0.5);
        assert_eq!(centroid.weight("rotor"), 1.0);
        let expected = (1.0_f64 + 0.25 + 1.0).sqrt();
        assert!((centroid.magnitude() - expected).abs() < 1e-12);
        // ordered like Category::ALL regardless of training order
        assert_eq!(
            classifier.categories(),
            vec![Category::DiagnosticPattern, Category::ObdCode, Category::MaintenanceGuide]
        );
    }

    #[test]
    fn nearest_centroid_wins() {
        let classifier = trained();
        let result = classifier
            .classify(&vector("q", &[("engine_oil", 1.0)]), "engine oil")
            .unwrap();
        assert_eq!(result.category, Category::MaintenanceGuide);
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn indicator_boost_is_capped() {
        let classifier = trained();
        let empty = vector("q", &[]);
        let text =
            "how often is the maintenance schedule interval to replace and change and service";
        let result = classifier.classify(&empty, text).unwrap();
        assert_eq!(result.category, Category::MaintenanceGuide);
        assert!((result.scores[&Category::MaintenanceGuide] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn trouble_code_boosts_obd_category() {
        let classifier = trained();
        let result = classifier.classify(&vector("q", &[]), "P0171").unwrap();
        assert_eq!(result.category, Category::ObdCode);
        assert!((result.scores[&Category::ObdCode] - 0.5).abs() < 1e-12);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn non_ascii_digits_earn_no_code_boost() {
        let classifier = trained();
        let digits = "\u{0661}\u{0662}\u{0663}\u{0664}";
        let text = format!("my coolant is {digits} p{digits}");
        let result = classifier.classify(&vector("q", &[]), &text).unwrap();
        assert_eq!(result.scores[&Category::ObdCode], 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn zero_scores_give_zero_confidence() {
        let classifier = trained();
        let result = classifier.classify(&vector("q", &[]), "xyzzy").unwrap();
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.category, Category::DiagnosticPattern);
    }
}
