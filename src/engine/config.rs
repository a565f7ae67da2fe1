use serde::{Deserialize, Serialize};

use crate::{
    classifier::ClassifierConfig,
    error::{EngineError, Result},
    vectorizer::evaluate::scoring::{Bm25Params, FusionWeights},
};

/// Tunables of the inference engine. Every field has a default, so a config
/// document only needs the keys it changes.
///
/// ```
/// use autodiag_retrieval::EngineConfig;
/// let config = EngineConfig::from_json_str(r#"{ "default_top_k": 3 }"#).unwrap();
/// assert_eq!(config.default_top_k, 3);
/// assert_eq!(config.bm25.k1, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_top_k: usize,
    pub bm25: Bm25Params,
    pub fusion: FusionWeights,
    /// Ranked matches must score strictly above this.
    pub score_floor: f64,
    /// Confidence reported when the query names a known trouble code.
    pub exact_match_confidence: f64,
    pub classifier: ClassifierConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_k: 5,
            bm25: Bm25Params::default(),
            fusion: FusionWeights::default(),
            score_floor: 0.01,
            exact_match_confidence: 0.98,
            classifier: ClassifierConfig::default(),
        }
    }
}

fn invalid(reason: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        reason: reason.into(),
    }
}

impl EngineConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bm25.k1 >= 0.0) {
            return Err(invalid(format!("bm25.k1 must be >= 0, got {}", self.bm25.k1)));
        }
        if !(0.0..=1.0).contains(&self.bm25.b) {
            return Err(invalid(format!("bm25.b must be in [0, 1], got {}", self.bm25.b)));
        }
        let FusionWeights { cosine, bm25, jaccard } = self.fusion;
        if [cosine, bm25, jaccard].iter().any(|w| !(*w >= 0.0)) {
            return Err(invalid("fusion weights must be non-negative"));
        }
        if !(self.score_floor >= 0.0) {
            return Err(invalid("score_floor must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.exact_match_confidence) {
            return Err(invalid("exact_match_confidence must be in [0, 1]"));
        }
        let c = &self.classifier;
        if [c.indicator_step, c.indicator_cap, c.obd_code_boost]
            .iter()
            .any(|v| !(*v >= 0.0))
        {
            return Err(invalid("classifier boosts must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_top_k, 5);
        assert_eq!(config.fusion, FusionWeights { cosine: 0.45, bm25: 0.40, jaccard: 0.15 });
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let json = r#"{ "bm25": { "k1": 1.2, "b": 0.5 }, "score_floor": 0.05 }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.bm25.k1, 1.2);
        assert_eq!(config.score_floor, 0.05);
        assert_eq!(config.classifier.obd_code_boost, 0.5);
    }

    #[test]
    fn partial_nested_sections_fill_in_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "bm25": { "k1": 1.2 } }"#).unwrap();
        assert_eq!(config.bm25, Bm25Params { k1: 1.2, b: 0.75 });
        let config = EngineConfig::from_json_str(r#"{ "fusion": { "jaccard": 0.2 } }"#).unwrap();
        assert_eq!(config.fusion, FusionWeights { cosine: 0.45, bm25: 0.40, jaccard: 0.2 });
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err =
            EngineConfig::from_json_str(r#"{ "bm25": { "k1": 1.5, "b": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
        let err = EngineConfig::from_json_str(r#"{ "fusion": { "cosine": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
