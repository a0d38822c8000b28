//! Centralized constants for the complaint classifier
//!
//! Single source of truth for the numeric policies the triage crate applies.
//! Keep these in sync with what the admin dashboard promises citizens.

/// SLA response windows, in hours, by final priority
pub mod sla {
    /// Critical tickets must be answered within a day
    pub const CRITICAL_HOURS: i64 = 24;

    pub const HIGH_HOURS: i64 = 48;

    /// Medium and Low share the standard window
    pub const STANDARD_HOURS: i64 = 72;
}

/// Sentiment label thresholds on the raw lexicon score
pub mod sentiment {
    /// Scores at or below this are Negative
    pub const NEGATIVE_AT_OR_BELOW: i32 = -3;

    /// Scores at or above this are Positive
    pub const POSITIVE_AT_OR_ABOVE: i32 = 2;

    /// Scores strictly below this escalate a non-Critical ticket to High
    pub const ESCALATE_BELOW: i32 = -5;

    /// Range of a single word's polarity weight in the lexicon
    pub const MIN_WORD_WEIGHT: i32 = -5;
    pub const MAX_WORD_WEIGHT: i32 = 5;
}

/// Display confidence bounds (not a calibrated probability)
pub mod confidence {
    pub const MIN: f64 = 0.75;
    pub const MAX: f64 = 0.95;

    /// Values are reported with two decimals
    pub const PRECISION: i32 = 2;
}

/// Fixed reply texts
pub mod replies {
    /// English reply for a damaged item when the citizen attached a photo.
    /// Overridable through `damaged_with_evidence` in the responses file.
    pub const DAMAGED_WITH_EVIDENCE: &str = "We verify that you have attached photographic evidence. \
Our claims team is assessing the damage for immediate compensation processing.";
}

/// Environment prefix for classifier settings (`SMARTPOST__CONFIDENCE=...`)
pub const ENV_PREFIX: &str = "SMARTPOST";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sla_ordering() {
        assert!(sla::CRITICAL_HOURS < sla::HIGH_HOURS);
        assert!(sla::HIGH_HOURS < sla::STANDARD_HOURS);
    }

    #[test]
    fn test_sentiment_thresholds() {
        assert!(sentiment::ESCALATE_BELOW < sentiment::NEGATIVE_AT_OR_BELOW);
        assert!(sentiment::NEGATIVE_AT_OR_BELOW < sentiment::POSITIVE_AT_OR_ABOVE);
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(confidence::MIN > 0.0 && confidence::MAX < 1.0);
        assert!(confidence::MIN < confidence::MAX);
    }
}
