//! Core types and traits for the SmartPost grievance classifier
//!
//! This crate carries no matching logic of its own. It defines:
//! - The fixed complaint vocabularies (category, priority, sentiment, language)
//! - The classification result handed to the ticket store and notifier
//! - Collaborator traits (sentiment scoring, wall clock, confidence)
//! - The shared error type

pub mod classification;
pub mod error;
pub mod traits;
pub mod types;

pub use classification::{ClassificationResult, ResponseOptions};
pub use error::{Error, Result};
pub use traits::{Clock, ConfidenceSource, FixedClock, SentimentScorer, SystemClock};
pub use types::{Category, Language, Priority, Sentiment};
