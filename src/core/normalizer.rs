// File: src/core/normalizer.rs
use crate::config::NormalizerConfig;
use crate::core::stopwords::StopwordSet;
use unicode_segmentation::UnicodeSegmentation;

/// Lower-cases, splits on Unicode word boundaries, keeps purely alphabetic
/// tokens and drops stopwords. Output tokens are joined by single spaces.
///
/// Hyphenated compounds (`detail-oriented`) stay one token and are therefore
/// dropped by the alphabetic filter.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: StopwordSet,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &NormalizerConfig) -> Self {
        let mut stopwords = StopwordSet::english();
        stopwords.extend(&config.extra_stopwords);
        Self { stopwords }
    }

    /// Normalizes `text`. Empty or all-stopword input gives `""`.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// The surviving tokens, in their original relative order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        join_hyphenated(&lowered)
            .into_iter()
            .filter(|token| is_alphabetic_word(token))
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}

/// Word-bound segments, with `-` and its directly adjacent segments glued
/// into a single token.
fn join_hyphenated(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut prev_was_space = true;
    let mut pending_join = false;

    for segment in text.split_word_bounds() {
        let is_space = segment.chars().all(char::is_whitespace);
        match tokens.last_mut() {
            Some(last) if segment == "-" && !prev_was_space => {
                last.push('-');
                pending_join = true;
            }
            Some(last) if pending_join && !is_space => {
                last.push_str(segment);
                pending_join = false;
            }
            _ => {
                pending_join = false;
                tokens.push(segment.to_string());
            }
        }
        prev_was_space = is_space;
    }
    tokens
}

fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
