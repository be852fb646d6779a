// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod report;

pub use crate::config::{ClassifierConfig, NormalizerConfig, PipelineConfig};
pub use crate::core::predictor::TrainedModel;
pub use crate::core::types::{FeatureVector, LabeledExample, Prediction, Vocabulary};
pub use crate::error::{ClassifierError, IoLayerError, Result};
