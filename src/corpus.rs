// File: src/corpus.rs
use crate::core::types::LabeledExample;
use crate::error::IoLayerError;
use std::fs;
use std::path::Path;

/// The built-in labelled résumé snippets, one per trait.
const DEFAULT_CORPUS: &[(&str, &str)] = &[
    ("Team player with leadership qualities", "Extroversion"),
    ("Prefers working alone and enjoys deep analysis", "Introversion"),
    ("Strong attention to detail and organization", "Conscientiousness"),
    ("Creative thinker with an open mind", "Openness"),
    ("Highly cooperative and empathetic", "Agreeableness"),
    ("Struggles with stress and anxiety", "Neuroticism"),
];

pub fn default_corpus() -> Vec<LabeledExample> {
    DEFAULT_CORPUS.iter().map(|&(text, label)| LabeledExample::new(text, label)).collect()
}

/// Loads a JSON array of `{"text": ..., "label": ...}` objects.
pub fn load_corpus(path: &Path) -> Result<Vec<LabeledExample>, IoLayerError> {
    let raw = fs::read_to_string(path).map_err(|source| IoLayerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| IoLayerError::Json {
        path: path.display().to_string(),
        source,
    })
}
