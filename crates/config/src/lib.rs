//! Configuration for the SmartPost complaint classifier
//!
//! - `constants`: SLA windows, sentiment thresholds, confidence bounds
//! - `keywords`: the phrase table definition (YAML)
//! - `lexicon`: word polarity weights for sentiment scoring (AFINN format)
//! - `responses`: reply templates by category and language (YAML)
//! - `settings`: layered runtime settings (defaults, file, environment)

pub mod constants;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod responses;
pub mod settings;

pub use error::ConfigError;
pub use keywords::{KeywordDefinition, KeywordsConfig};
pub use lexicon::SentimentLexicon;
pub use responses::ResponsesConfig;
pub use settings::{ClassifierSettings, ConfidenceMode};
