// File: src/error.rs
use thiserror::Error;

/// Failures raised by the classification core itself.
///
/// None of these are retried: the computation is deterministic, so the same
/// input would fail the same way again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("invalid training data: {reason}")]
    InvalidTrainingData { reason: String },

    #[error("model has not been trained")]
    ModelNotTrained,

    #[error("feature vector has length {actual}, trained vocabulary has {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl ClassifierError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ClassifierError::InvalidTrainingData { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Failures of the file-facing collaborators (corpus loading, config, reports).
#[derive(Error, Debug)]
pub enum IoLayerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
