//! Complaint keyword matching
//!
//! Maps free text to the single most specific keyword in the table:
//! - Longest phrase wins ("missing package" over "missing")
//! - Whole-word only: a phrase must sit between separators or text edges
//! - Case-insensitive, no script-aware tokenization
//!
//! # Example
//!
//! ```ignore
//! use smartpost_text_processing::keywords::KeywordTable;
//!
//! let table = KeywordTable::builtin()?;
//! let hit = table.find_best_match("My missing package never came").unwrap();
//! assert_eq!(hit.phrase, "missing package");
//! ```

mod table;

pub use table::{KeywordSnapshot, KeywordTable};

use regex::Regex;
use serde::{Deserialize, Serialize};
use smartpost_config::KeywordDefinition;
use smartpost_core::{Category, Error, Language, Priority, Result};

/// Characters that delimit a phrase, besides the start and end of the text
pub const SEPARATOR_CLASS: &str = r#"[\s.,!?\-"']"#;

/// A single lexical trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Lowercase phrase, unique within a table
    pub phrase: String,
    pub category: Category,
    pub priority: Priority,
    pub language: Language,
}

impl KeywordEntry {
    /// Create an entry, normalizing the phrase to trimmed lowercase.
    ///
    /// Empty phrases are rejected: their pattern would match any separator.
    pub fn new(
        phrase: &str,
        category: Category,
        priority: Priority,
        language: Language,
    ) -> Result<Self> {
        let phrase = normalize_phrase(phrase)?;
        Ok(Self {
            phrase,
            category,
            priority,
            language,
        })
    }

    /// Phrase length in characters, the match precedence key
    pub fn char_len(&self) -> usize {
        self.phrase.chars().count()
    }
}

impl TryFrom<&KeywordDefinition> for KeywordEntry {
    type Error = Error;

    fn try_from(def: &KeywordDefinition) -> Result<Self> {
        KeywordEntry::new(&def.phrase, def.category, def.priority, def.language)
    }
}

fn normalize_phrase(phrase: &str) -> Result<String> {
    let normalized = phrase.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(Error::InvalidKeyword(phrase.to_string()));
    }
    Ok(normalized)
}

/// Compile the boundary-anchored, case-insensitive pattern for a phrase.
///
/// Metacharacters inside the phrase are escaped, so "c.o.d" only matches the
/// literal text.
pub fn boundary_pattern(phrase: &str) -> Result<Regex> {
    let pattern = format!(
        "(?i)(?:^|{sep}){phrase}(?:$|{sep})",
        sep = SEPARATOR_CLASS,
        phrase = regex::escape(phrase),
    );
    Regex::new(&pattern).map_err(|e| Error::Pattern {
        phrase: phrase.to_string(),
        reason: e.to_string(),
    })
}
