//! Lexicon sentiment scoring
//!
//! Sums per-word polarity weights from a `SentimentLexicon` (AFINN-165 by
//! default) over the Unicode words of the text. A word directly after a
//! negator ("not", "never", "don't", ...) counts with its sign flipped, so
//! "not happy" scores negative.
//!
//! Romanized Hindi, Telugu and Tamil words carry no weight; those complaints
//! are routed by keyword and usually score neutral.

use smartpost_config::{ConfigError, SentimentLexicon};
use smartpost_core::SentimentScorer;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Words that flip the weight of the word right after them
const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt",
    "isn't", "wasnt", "wasn't", "werent", "weren't", "arent", "aren't", "cannot", "cant",
    "can't", "couldnt", "couldn't", "wont", "won't", "wouldnt", "wouldn't", "shouldnt",
    "shouldn't", "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't", "nothing",
    "neither", "nor", "without",
];

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word)
}

/// Default `SentimentScorer` backed by a word list
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicon: Arc<SentimentLexicon>,
}

impl LexiconSentimentScorer {
    pub fn new(lexicon: Arc<SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    /// Scorer over the shipped AFINN-165 list
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self::new(SentimentLexicon::builtin()?))
    }

    /// Number of words with a polarity weight
    pub fn vocabulary_size(&self) -> usize {
        self.lexicon.len()
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> i32 {
        let lowered = text.to_lowercase();
        let mut total = 0;
        let mut negated = false;

        for word in lowered.unicode_words() {
            let w = self.lexicon.weight(word);
            total += if negated { -w } else { w };
            negated = is_negator(word);
        }

        tracing::trace!(score = total, "Lexicon sentiment scored");
        total
    }
}
