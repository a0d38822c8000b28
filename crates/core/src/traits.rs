//! Collaborator traits
//!
//! The classifier consumes three capabilities it does not own: a lexicon
//! sentiment scorer, a wall clock and a source of display confidence. Each is
//! a trait so tests and deployments can swap implementations.

use chrono::{DateTime, Utc};

/// Lexicon-based polarity scorer
pub trait SentimentScorer: Send + Sync {
    /// Signed score for arbitrary text. Must be total over any input.
    fn score(&self, text: &str) -> i32;
}

/// Wall-clock source for SLA deadlines
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Produces the cosmetic confidence value shown next to a classification
pub trait ConfidenceSource: Send + Sync {
    /// `matched_phrase` is the keyword that decided the category, if any.
    /// Implementations must stay within `[0.75, 0.95]`.
    fn confidence(&self, matched_phrase: Option<&str>) -> f64;
}

/// System UTC clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
