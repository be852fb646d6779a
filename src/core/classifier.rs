// File: src/core/classifier.rs
use crate::config::ClassifierConfig;
use crate::core::types::FeatureVector;
use crate::error::{ClassifierError, Result};
use tracing::info;

/// Per-class statistics, stored in log space.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    pub label: String,
    pub log_prior: f64,
    /// log P(feature | class), one entry per vocabulary index.
    pub log_likelihoods: Vec<f64>,
}

/// Multinomial Naive Bayes over bag-of-words counts.
///
/// An untrained instance only carries its configuration. `fit` never mutates
/// `self`; it returns a new trained classifier, so a trained instance can be
/// shared across threads and read concurrently.
#[derive(Debug, Clone, Default)]
pub struct MultinomialNb {
    config: ClassifierConfig,
    classes: Option<Vec<ClassModel>>,
    n_features: usize,
}

impl MultinomialNb {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config, classes: None, n_features: 0 }
    }

    pub fn is_trained(&self) -> bool {
        self.classes.is_some()
    }

    /// Trained classes in label order (first-seen order of the training data).
    pub fn classes(&self) -> Result<&[ClassModel]> {
        self.classes.as_deref().ok_or(ClassifierError::ModelNotTrained)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.classes
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|c| c.label.as_str())
            .collect()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Trains on `(vector, label)` pairs and returns the trained classifier.
    ///
    /// Priors are class frequencies. Likelihoods use additive smoothing:
    /// `(count(i, L) + alpha) / (total(L) + alpha * |V|)`, with `alpha = 1`
    /// giving Laplace smoothing.
    pub fn fit(&self, examples: &[(FeatureVector, String)]) -> Result<MultinomialNb> {
        let alpha = self.config.alpha;
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ClassifierError::invalid(format!(
                "smoothing alpha must be finite and positive, got {alpha}"
            )));
        }
        let Some((first, _)) = examples.first() else {
            return Err(ClassifierError::invalid("training set is empty"));
        };
        let n_features = first.len();

        // Grouped in first-seen label order; this order is the tie-break order.
        let mut labels: Vec<&str> = Vec::new();
        let mut doc_counts: Vec<usize> = Vec::new();
        let mut feature_counts: Vec<Vec<u64>> = Vec::new();

        for (vector, label) in examples {
            if label.trim().is_empty() {
                return Err(ClassifierError::invalid("example with an empty label"));
            }
            if vector.len() != n_features {
                return Err(ClassifierError::invalid(format!(
                    "ragged feature vectors: expected length {n_features}, found {}",
                    vector.len()
                )));
            }
            let class = match labels.iter().position(|l| *l == label.as_str()) {
                Some(class) => class,
                None => {
                    labels.push(label.as_str());
                    doc_counts.push(0);
                    feature_counts.push(vec![0; n_features]);
                    labels.len() - 1
                }
            };
            doc_counts[class] += 1;
            for (slot, &count) in feature_counts[class].iter_mut().zip(vector.counts()) {
                *slot += u64::from(count);
            }
        }

        if let Some(class) = doc_counts.iter().position(|&n| n == 0) {
            return Err(ClassifierError::invalid(format!(
                "label {:?} has no training examples",
                labels[class]
            )));
        }

        let total_docs = examples.len() as f64;
        let smoothing_mass = alpha * n_features as f64;
        let classes: Vec<ClassModel> = labels
            .iter()
            .zip(doc_counts.iter().zip(&feature_counts))
            .map(|(label, (&docs, counts))| {
                let total_tokens: u64 = counts.iter().sum();
                let denominator = total_tokens as f64 + smoothing_mass;
                ClassModel {
                    label: label.to_string(),
                    log_prior: (docs as f64 / total_docs).ln(),
                    log_likelihoods: counts
                        .iter()
                        .map(|&c| ((c as f64 + alpha) / denominator).ln())
                        .collect(),
                }
            })
            .collect();

        info!(
            examples = examples.len(),
            labels = classes.len(),
            features = n_features,
            "naive bayes trained"
        );

        Ok(MultinomialNb { config: self.config.clone(), classes: Some(classes), n_features })
    }

    /// Unnormalized log posteriors, one per label, in trained label order:
    /// `log P(L) + sum_i x[i] * log P(i | L)`.
    pub fn predict_log_posteriors(&self, vector: &FeatureVector) -> Result<Vec<(String, f64)>> {
        let classes = self.classes()?;
        if vector.len() != self.n_features {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features,
                actual: vector.len(),
            });
        }
        Ok(classes
            .iter()
            .map(|class| {
                let evidence: f64 = vector
                    .counts()
                    .iter()
                    .zip(&class.log_likelihoods)
                    .filter(|&(&count, _)| count > 0)
                    .map(|(&count, &log_p)| f64::from(count) * log_p)
                    .sum();
                (class.label.clone(), class.log_prior + evidence)
            })
            .collect())
    }
}
