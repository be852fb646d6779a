//! Property tests for the pipeline invariants.

use personality_core::core::normalizer::Normalizer;
use personality_core::core::vectorizer::Vectorizer;
use personality_core::corpus::default_corpus;
use personality_core::{LabeledExample, PipelineConfig, TrainedModel};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "team", "leadership", "alone", "analysis", "detail", "creative", "stress", "calm", "the",
    "and", "with", "2024", "open-minded", "Driven!", "focused",
];

const LABELS: &[&str] = &["Openness", "Neuroticism", "Introversion"];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn arb_corpus() -> impl Strategy<Value = Vec<LabeledExample>> {
    prop::collection::vec(
        (arb_text(), prop::sample::select(LABELS)),
        1..20,
    )
    .prop_map(|pairs| pairs.into_iter().map(|(t, l)| LabeledExample::new(t, l)).collect())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[a-zA-Z0-9éßİÉ ,.;:!?'()-]{0,80}") {
        let n = Normalizer::new();
        let once = n.normalize(&text);
        prop_assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn transform_length_matches_vocabulary(
        corpus in prop::collection::vec(arb_text(), 0..8),
        query in arb_text()
    ) {
        let n = Normalizer::new();
        let normalized: Vec<String> = corpus.iter().map(|t| n.normalize(t)).collect();
        let vocab = Vectorizer::fit(&normalized);
        let vector = Vectorizer::transform(&n.normalize(&query), &vocab);
        prop_assert_eq!(vector.len(), vocab.len());
    }

    #[test]
    fn priors_sum_to_one(corpus in arb_corpus()) {
        let model = TrainedModel::fit(&corpus, &PipelineConfig::default()).unwrap();
        let sum: f64 = model
            .classifier()
            .classes()
            .unwrap()
            .iter()
            .map(|c| c.log_prior.exp())
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probabilities_sum_to_one(query in arb_text()) {
        let model = TrainedModel::fit(&default_corpus(), &PipelineConfig::default()).unwrap();
        let proba = model.predict_proba(&query).unwrap();
        let sum: f64 = proba.iter().map(|(_, p)| p).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);

        let prediction = model.predict(&query).unwrap();
        prop_assert!(prediction.confidence >= 0.0 && prediction.confidence <= 100.0);
    }
}
