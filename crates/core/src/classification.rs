//! Classification result handed to the ticket store and notifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Category, Language, Priority, Sentiment};

/// Reply texts offered to the officer handling the ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOptions {
    /// English reply (may be the photo-evidence override)
    pub en: String,
    /// Reply in the keyword's language, when a template exists for it
    pub regional: Option<String>,
    /// Language of the matched keyword
    pub detected_lang: Language,
}

/// Output of a single classification call.
///
/// Field names serialize in camelCase to match the ticket records the HTTP
/// layer already stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub priority: Priority,
    pub sentiment: Sentiment,
    /// Raw lexicon score (sum of word polarities)
    pub score: i32,
    /// Phrase that matched, if any
    pub detected_keyword: Option<String>,
    /// Language of the matched phrase, English when nothing matched
    pub detected_language: Language,
    pub suggested_response: String,
    pub response_options: ResponseOptions,
    /// Display-only confidence in `[0.75, 0.95]`. Not a calibrated probability.
    pub confidence: f64,
    pub explanation: String,
    pub sla_deadline: DateTime<Utc>,
}

impl ClassificationResult {
    /// Time remaining until the SLA deadline (negative once breached)
    pub fn time_to_deadline(&self, now: DateTime<Utc>) -> chrono::Duration {
        self.sla_deadline - now
    }
}
