// src/core/mod.rs

pub mod classifier;
pub mod normalizer;
pub mod predictor;
pub mod stopwords;
pub mod types;
pub mod vectorizer;
