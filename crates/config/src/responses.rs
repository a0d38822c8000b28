//! Reply Templates Configuration
//!
//! Config-driven reply templates keyed by category and language, loaded from
//! `config/responses.yaml`. Replaces hardcoded reply strings in the triage code.

use serde::{Deserialize, Serialize};
use smartpost_core::{Category, Language};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::replies;
use crate::error::ConfigError;

const BUILTIN_RESPONSES: &str = include_str!("../../../config/responses.yaml");

/// Reply templates loaded from responses.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsesConfig {
    /// Templates by category, then by language
    #[serde(default)]
    pub templates: HashMap<Category, HashMap<Language, String>>,
    /// English reply for damaged items reported with a photo
    #[serde(default = "default_damaged_with_evidence")]
    pub damaged_with_evidence: String,
}

fn default_damaged_with_evidence() -> String {
    replies::DAMAGED_WITH_EVIDENCE.to_string()
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
            damaged_with_evidence: default_damaged_with_evidence(),
        }
    }
}

impl ResponsesConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            what: "reply templates".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Templates shipped with the classifier
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(BUILTIN_RESPONSES)
    }

    /// The Others English template is the fallback for every category, so it
    /// must exist. Other gaps are tolerated and logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.english(Category::Others).is_none() {
            return Err(ConfigError::Validation(
                "reply templates must define an English entry for Others".to_string(),
            ));
        }

        for category in Category::ALL {
            if self.english(category).is_none() {
                tracing::warn!(
                    category = %category,
                    "No English reply template, Others template will be used"
                );
            }
        }
        Ok(())
    }

    /// Template for a category in a specific language, without fallback
    pub fn get(&self, category: Category, language: Language) -> Option<&str> {
        self.templates
            .get(&category)
            .and_then(|m| m.get(&language))
            .map(|s| s.as_str())
    }

    pub fn english(&self, category: Category) -> Option<&str> {
        self.get(category, Language::English)
    }
}
