// File: src/evaluation.rs
use crate::core::predictor::TrainedModel;
use crate::core::types::LabeledExample;
use crate::error::Result;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Accuracy tally over a labelled test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
}

impl Evaluation {
    /// Fraction of correct predictions; `0.0` for an empty test set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Seeded shuffle, then split off `ceil(n * test_ratio)` examples for testing.
///
/// `test_ratio` is clamped to `[0, 1]`. At least one example always stays in
/// the training partition when the input is non-empty.
pub fn train_test_split(
    examples: &[LabeledExample],
    test_ratio: f64,
    seed: u64,
) -> (Vec<LabeledExample>, Vec<LabeledExample>) {
    let ratio = if test_ratio.is_nan() { 0.0 } else { test_ratio.clamp(0.0, 1.0) };
    let mut shuffled = examples.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let n = shuffled.len();
    let test_len = ((n as f64 * ratio).ceil() as usize).min(n.saturating_sub(1));
    let test = shuffled.split_off(n - test_len);
    (shuffled, test)
}

/// Predicts every example and counts exact label matches.
pub fn evaluate(model: &TrainedModel, examples: &[LabeledExample]) -> Result<Evaluation> {
    let mut eval = Evaluation { total: examples.len(), correct: 0 };
    for example in examples {
        if model.predict(&example.text)?.label == example.label {
            eval.correct += 1;
        }
    }
    Ok(eval)
}
