//! Display confidence sources
//!
//! The value shown next to a classification is cosmetic. It is not derived
//! from a model and must not be read as a probability.

use rand::Rng;
use smartpost_config::constants::confidence::{MAX, MIN, PRECISION};
use smartpost_config::ConfidenceMode;
use smartpost_core::ConfidenceSource;
use std::sync::Arc;

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (value * factor).round() / factor
}

/// Uniform two-decimal value in `[0.75, 0.95]`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomConfidence;

impl ConfidenceSource for RandomConfidence {
    fn confidence(&self, _matched_phrase: Option<&str>) -> f64 {
        let value = rand::thread_rng().gen_range(MIN..=MAX);
        round_to_precision(value).clamp(MIN, MAX)
    }
}

/// Deterministic value that grows with the number of words in the matched
/// phrase: 0.75 with no match, 0.80 for one word, +0.05 per extra word,
/// capped at 0.95
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecificityConfidence;

impl SpecificityConfidence {
    const BASE_MATCH: f64 = 0.80;
    const PER_EXTRA_WORD: f64 = 0.05;
}

impl ConfidenceSource for SpecificityConfidence {
    fn confidence(&self, matched_phrase: Option<&str>) -> f64 {
        let Some(phrase) = matched_phrase else {
            return MIN;
        };
        let words = phrase.split_whitespace().count().max(1);
        let value = Self::BASE_MATCH + Self::PER_EXTRA_WORD * (words - 1) as f64;
        round_to_precision(value.min(MAX))
    }
}

/// Always the same value; for tests and reproducible reports
#[derive(Debug, Clone, Copy)]
pub struct FixedConfidence(pub f64);

impl ConfidenceSource for FixedConfidence {
    fn confidence(&self, _matched_phrase: Option<&str>) -> f64 {
        self.0
    }
}

/// Confidence source selected by configuration
pub fn create_confidence_source(mode: ConfidenceMode) -> Arc<dyn ConfidenceSource> {
    match mode {
        ConfidenceMode::Random => Arc::new(RandomConfidence),
        ConfidenceMode::Specificity => Arc::new(SpecificityConfidence),
    }
}
