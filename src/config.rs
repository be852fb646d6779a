// File: src/config.rs
use crate::error::IoLayerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smoothing settings for the Naive Bayes stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant. `1.0` is Laplace smoothing.
    pub alpha: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

/// Words dropped in addition to the English stopword list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub normalizer: NormalizerConfig,
    pub classifier: ClassifierConfig,
}

impl PipelineConfig {
    /// Reads a JSON config; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, IoLayerError> {
        let raw = fs::read_to_string(path).map_err(|source| IoLayerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| IoLayerError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_laplace_smoothing() {
        assert_eq!(PipelineConfig::default().classifier.alpha, 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"normalizer": {"extra_stopwords": ["cv"]}}"#).unwrap();
        assert_eq!(cfg.normalizer.extra_stopwords, vec!["cv"]);
        assert_eq!(cfg.classifier.alpha, 1.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PipelineConfig::from_json_file(Path::new("/nonexistent/cfg.json")).unwrap_err();
        assert!(matches!(err, IoLayerError::Io { .. }));
    }
}
