//! Keyword Table Definitions
//!
//! Config-driven phrase → {category, priority, language} entries.
//! The shipped table lives in `config/keywords.yaml` and is embedded at build
//! time; deployments may point `keywords_path` at their own file instead.

use serde::{Deserialize, Serialize};
use smartpost_core::{Category, Language, Priority};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;

const BUILTIN_KEYWORDS: &str = include_str!("../../../config/keywords.yaml");

/// One keyword entry as written in the definition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDefinition {
    pub phrase: String,
    pub category: Category,
    pub priority: Priority,
    /// Defaults to English when omitted
    #[serde(default, rename = "lang")]
    pub language: Language,
}

/// Keyword definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Entries in file order. A repeated phrase replaces the earlier entry.
    #[serde(default)]
    pub keywords: Vec<KeywordDefinition>,
}

impl KeywordsConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                reason: e.to_string(),
            })?;

        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            entries = config.keywords.len(),
            "Loaded keyword definitions"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            what: "keyword definitions".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;

        let repeated = config.duplicate_phrases();
        if !repeated.is_empty() {
            tracing::warn!(
                count = repeated.len(),
                phrases = ?repeated,
                "Keyword definitions repeat phrases, later entries win"
            );
        }
        Ok(config)
    }

    /// The keyword table shipped with the classifier
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(BUILTIN_KEYWORDS)
    }

    /// Reject entries that could never be matched safely.
    ///
    /// An empty phrase would turn into a pattern matching every separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pos) = self.keywords.iter().position(|k| k.phrase.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "keyword entry #{} has an empty phrase",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Phrases defined more than once (case-insensitive), in first-seen order
    pub fn duplicate_phrases(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for def in &self.keywords {
            let phrase = def.phrase.trim().to_lowercase();
            if !seen.insert(phrase.clone()) && reported.insert(phrase.clone()) {
                duplicates.push(phrase);
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
