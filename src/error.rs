/// Errors raised by the retrieval engine.
///
/// Every variant is a caller-side contract violation. Nothing here is
/// retryable: fix the call order or the configuration and try again.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A component was used before its build step ran
    /// (`build_index` for the vectorizer, `build_centroids` for the classifier).
    #[error("{component} used before it was built")]
    NotInitialized { component: &'static str },

    #[error("invalid engine config: {reason}")]
    InvalidConfig { reason: String },

    #[error("malformed config document: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
