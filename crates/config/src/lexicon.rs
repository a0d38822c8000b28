//! Sentiment Lexicon
//!
//! Word → polarity weight in `-5..=+5`, in the AFINN word-list format: one
//! `word<TAB>weight` entry per line. The shipped list is AFINN-165, embedded
//! from `config/afinn-165.txt`; deployments may point `lexicon_path` at their
//! own list in the same format.
//!
//! Multi-word entries ("not good", "fed up") are kept as written. Scorers that
//! look up single words never hit them.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::constants::sentiment::{MAX_WORD_WEIGHT, MIN_WORD_WEIGHT};
use crate::error::ConfigError;

const BUILTIN_LEXICON: &str = include_str!("../../../config/afinn-165.txt");

static BUILTIN: OnceCell<Arc<SentimentLexicon>> = OnceCell::new();

/// Word polarity table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLexicon {
    weights: HashMap<String, i32>,
}

impl SentimentLexicon {
    /// Load a word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                reason: e.to_string(),
            })?;

        let lexicon = Self::from_afinn(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            words = lexicon.len(),
            "Loaded sentiment lexicon"
        );
        Ok(lexicon)
    }

    /// Parse `word<TAB>weight` lines. Blank lines are skipped; a repeated
    /// word keeps its last weight.
    pub fn from_afinn(content: &str) -> Result<Self, ConfigError> {
        let mut weights = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let (word, weight) = line
                .rsplit_once('\t')
                .or_else(|| line.trim_end().rsplit_once(' '))
                .ok_or_else(|| ConfigError::Parse {
                    what: "sentiment lexicon".to_string(),
                    reason: format!("line {}: expected `word<TAB>weight`", idx + 1),
                })?;

            let weight: i32 = weight.trim().parse().map_err(|_| ConfigError::Parse {
                what: "sentiment lexicon".to_string(),
                reason: format!("line {}: `{}` is not an integer weight", idx + 1, weight.trim()),
            })?;
            if !(MIN_WORD_WEIGHT..=MAX_WORD_WEIGHT).contains(&weight) {
                return Err(ConfigError::Validation(format!(
                    "lexicon line {}: weight {} outside {}..={}",
                    idx + 1,
                    weight,
                    MIN_WORD_WEIGHT,
                    MAX_WORD_WEIGHT
                )));
            }

            let word = word.trim().to_lowercase();
            if word.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "lexicon line {} has an empty word",
                    idx + 1
                )));
            }
            weights.insert(word, weight);
        }

        Ok(Self { weights })
    }

    /// The AFINN-165 list shipped with the classifier, parsed once per process
    pub fn builtin() -> Result<Arc<Self>, ConfigError> {
        BUILTIN
            .get_or_try_init(|| Self::from_afinn(BUILTIN_LEXICON).map(Arc::new))
            .cloned()
    }

    /// Weight of a lowercase word; 0 when the word is not listed
    pub fn weight(&self, word: &str) -> i32 {
        self.weights.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
