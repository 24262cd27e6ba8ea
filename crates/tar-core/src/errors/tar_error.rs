use super::ConfigError;

/// Top-level error for the review engine.
///
/// None of these are retried internally. `InsufficientSeed` is recovered by
/// collecting more judgments, `ModelNotTrained` is a caller ordering bug, and
/// `TrainingFailed` leaves the controller ready for another `train()`.
#[derive(Debug, thiserror::Error)]
pub enum TarError {
    #[error("empty input: {reason}")]
    EmptyInput { reason: String },

    #[error(
        "insufficient seed: {judged} judged documents with {distinct_labels} distinct labels, \
         need at least {required} covering both labels"
    )]
    InsufficientSeed {
        judged: usize,
        required: usize,
        distinct_labels: usize,
    },

    #[error("model not trained: {operation} requires a successful train() first")]
    ModelNotTrained { operation: String },

    #[error("length mismatch: {vectors} feature vectors, {labels} labels")]
    LengthMismatch { vectors: usize, labels: usize },

    #[error("unknown document: {id}")]
    UnknownDocument { id: String },

    #[error("duplicate document in corpus: {id}")]
    DuplicateDocument { id: String },

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },

    #[error("{operation} is not allowed in phase {phase}")]
    InvalidPhase { operation: String, phase: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TarError {
    /// Shorthand for [`TarError::ModelNotTrained`].
    pub fn not_trained(operation: impl Into<String>) -> Self {
        Self::ModelNotTrained {
            operation: operation.into(),
        }
    }

    /// Shorthand for [`TarError::EmptyInput`].
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::EmptyInput {
            reason: reason.into(),
        }
    }

    /// Whether the caller may simply call the same operation again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TrainingFailed { .. })
    }
}
