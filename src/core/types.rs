// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of a token in the fitted vocabulary.
pub type FeatureIndex = usize;

/// One entry of the training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub text: String,
    pub label: String,
}

impl LabeledExample {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self { text: text.into(), label: label.into() }
    }
}

/// Ordered, deduplicated token list. A token's position is its feature index.
/// Immutable once fitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, FeatureIndex>,
}

impl Vocabulary {
    /// Builds a vocabulary from tokens in first-seen order, skipping repeats.
    pub(crate) fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab = Vocabulary::default();
        for token in tokens {
            if !vocab.index.contains_key(token) {
                vocab.index.insert(token.to_string(), vocab.tokens.len());
                vocab.tokens.push(token.to_string());
            }
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<FeatureIndex> {
        self.index.get(token).copied()
    }

    pub fn token(&self, index: FeatureIndex) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Bag-of-words counts, one slot per vocabulary token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Vec<u32>);

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self(counts)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    /// Sum of all counts, i.e. the number of in-vocabulary tokens.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    pub(crate) fn increment(&mut self, index: FeatureIndex) {
        self.0[index] += 1;
    }
}

/// Predicted label plus confidence in percent, in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

impl Prediction {
    /// Confidence rounded to two decimals, e.g. `"87.35"`.
    pub fn confidence_display(&self) -> String {
        format!("{:.2}", self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_keeps_first_seen_order() {
        let vocab = Vocabulary::from_tokens(["team", "player", "team", "lead"]);
        assert_eq!(vocab.tokens(), &["team", "player", "lead"]);
        assert_eq!(vocab.index_of("lead"), Some(2));
        assert_eq!(vocab.index_of("alone"), None);
        assert_eq!(vocab.token(1), Some("player"));
    }

    #[test]
    fn feature_vector_total_sums_counts() {
        let v = FeatureVector::from_counts(vec![2, 0, 3]);
        assert_eq!(v.total(), 5);
        assert_eq!(FeatureVector::zeros(4).total(), 0);
    }

    #[test]
    fn confidence_display_rounds_to_two_places() {
        let p = Prediction { label: "Openness".into(), confidence: 87.3456 };
        assert_eq!(p.confidence_display(), "87.35");
    }
}
