// File: src/core/predictor.rs
use crate::config::PipelineConfig;
use crate::core::classifier::MultinomialNb;
use crate::core::normalizer::Normalizer;
use crate::core::types::{FeatureVector, LabeledExample, Prediction, Vocabulary};
use crate::core::vectorizer::Vectorizer;
use crate::error::Result;
use tracing::{debug, warn};

/// A fitted pipeline: normalizer, vocabulary and trained classifier.
///
/// Built once by [`TrainedModel::fit`] and read-only afterwards. Retraining
/// produces a new value, so a model behind an `Arc` can serve concurrent
/// predictions without locking.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    normalizer: Normalizer,
    vocabulary: Vocabulary,
    classifier: MultinomialNb,
}

impl TrainedModel {
    /// Normalizes the corpus, fits the vocabulary and trains the classifier.
    /// Nothing is returned unless every stage succeeds.
    pub fn fit(examples: &[LabeledExample], config: &PipelineConfig) -> Result<TrainedModel> {
        let normalizer = Normalizer::with_config(&config.normalizer);
        let normalized: Vec<String> =
            examples.iter().map(|ex| normalizer.normalize(&ex.text)).collect();

        let vocabulary = Vectorizer::fit(&normalized);
        let vectors: Vec<(FeatureVector, String)> = normalized
            .iter()
            .zip(examples)
            .map(|(text, ex)| (Vectorizer::transform(text, &vocabulary), ex.label.clone()))
            .collect();

        let classifier = MultinomialNb::new(config.classifier.clone()).fit(&vectors)?;
        Ok(TrainedModel { normalizer, vocabulary, classifier })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Labels in trained order; ties in `predict` go to the earliest one.
    pub fn labels(&self) -> Vec<&str> {
        self.classifier.labels()
    }

    /// Normalizes and vectorizes `text` against the fitted vocabulary.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            warn!("query normalized to an empty string; prediction falls back to priors");
        }
        Vectorizer::transform(&normalized, &self.vocabulary)
    }

    /// Posterior probability of every label, in trained label order.
    /// The values sum to 1.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let scores = self.classifier.predict_log_posteriors(&self.vectorize(text))?;
        Ok(softmax(scores))
    }

    /// Most probable label and its probability as a percentage.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let probabilities = self.predict_proba(text)?;
        let mut best: Option<(String, f64)> = None;
        for (label, p) in probabilities {
            // Strict comparison keeps the earliest label on ties.
            if best.as_ref().map_or(true, |(_, best_p)| p > *best_p) {
                best = Some((label, p));
            }
        }
        // A trained classifier always has at least one label.
        let (label, p) = best.unwrap_or_default();
        let prediction = Prediction { label, confidence: p * 100.0 };
        debug!(label = %prediction.label, confidence = prediction.confidence, "prediction");
        Ok(prediction)
    }
}

/// Log-sum-exp normalization of log scores into probabilities.
fn softmax(scores: Vec<(String, f64)>) -> Vec<(String, f64)> {
    let max = scores.iter().map(|(_, s)| *s).fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<(String, f64)> =
        scores.into_iter().map(|(label, s)| (label, (s - max).exp())).collect();
    let sum: f64 = exps.iter().map(|(_, e)| e).sum();
    exps.into_iter().map(|(label, e)| (label, e / sum)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::default_corpus;

    fn model() -> TrainedModel {
        TrainedModel::fit(&default_corpus(), &PipelineConfig::default()).expect("default corpus")
    }

    #[test]
    fn softmax_sums_to_one_and_survives_large_magnitudes() {
        let probs = softmax(vec![("a".into(), -1000.0), ("b".into(), -1001.0)]);
        let sum: f64 = probs.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probs[0].1 > probs[1].1);
    }

    #[test]
    fn predicts_class_of_shared_vocabulary() {
        let p = model().predict("Creative thinker, always with an open mind").unwrap();
        assert_eq!(p.label, "Openness");
        assert!(p.confidence > 100.0 / 6.0);
    }

    #[test]
    fn empty_query_falls_back_to_first_label_at_prior() {
        let p = model().predict("").unwrap();
        assert_eq!(p.label, "Extroversion");
        assert!((p.confidence - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn proba_is_in_label_order() {
        let m = model();
        let proba = m.predict_proba("stress").unwrap();
        let labels: Vec<&str> = proba.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, m.labels());
    }

    #[test]
    fn fit_on_empty_corpus_fails() {
        assert!(TrainedModel::fit(&[], &PipelineConfig::default()).is_err());
    }
}
