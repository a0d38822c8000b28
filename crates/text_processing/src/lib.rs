//! Text processing for complaint triage
//!
//! - `keywords`: boundary-aware, longest-match keyword table
//! - `sentiment`: lexicon polarity scorer

pub mod keywords;
pub mod sentiment;

pub use keywords::{boundary_pattern, KeywordEntry, KeywordSnapshot, KeywordTable};
pub use sentiment::LexiconSentimentScorer;
