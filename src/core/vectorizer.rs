// File: src/core/vectorizer.rs
use crate::core::types::{FeatureVector, Vocabulary};
use tracing::debug;

/// Bag-of-words count vectorizer over already-normalized text.
///
/// Both operations split on whitespace only; normalization is done upstream.
pub struct Vectorizer;

impl Vectorizer {
    /// Collects distinct tokens across `corpus` in first-seen order.
    /// Fitting the same corpus twice yields the same mapping.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Vocabulary {
        let vocab =
            Vocabulary::from_tokens(corpus.iter().flat_map(|doc| doc.as_ref().split_whitespace()));
        debug!(documents = corpus.len(), tokens = vocab.len(), "vocabulary fitted");
        vocab
    }

    /// Counts vocabulary tokens in `text`. Out-of-vocabulary tokens are ignored.
    pub fn transform(text: &str, vocab: &Vocabulary) -> FeatureVector {
        let mut vector = FeatureVector::zeros(vocab.len());
        for index in text.split_whitespace().filter_map(|token| vocab.index_of(token)) {
            vector.increment(index);
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_assigns_indices_in_first_seen_order() {
        let vocab = Vectorizer::fit(&["team player", "player alone analysis"]);
        assert_eq!(vocab.tokens(), &["team", "player", "alone", "analysis"]);
    }

    #[test]
    fn refit_is_deterministic() {
        let corpus = ["deep analysis alone", "team leadership", "deep team"];
        assert_eq!(Vectorizer::fit(&corpus), Vectorizer::fit(&corpus));
    }

    #[test]
    fn transform_counts_and_ignores_unknown_tokens() {
        let vocab = Vectorizer::fit(&["team player leadership"]);
        let v = Vectorizer::transform("team team unknown leadership", &vocab);
        assert_eq!(v.counts(), &[2, 0, 1]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn transform_of_empty_text_is_zero_vector() {
        let vocab = Vectorizer::fit(&["a b c"]);
        assert_eq!(Vectorizer::transform("", &vocab), FeatureVector::zeros(3));
    }

    #[test]
    fn empty_corpus_gives_empty_vocabulary() {
        let empty: [&str; 0] = [];
        assert!(Vectorizer::fit(&empty).is_empty());
    }
}
