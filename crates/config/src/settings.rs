//! Classifier settings
//!
//! Layered configuration:
//! 1. Built-in defaults (serde defaults below)
//! 2. Optional settings file (YAML, TOML or JSON, picked by extension)
//! 3. Environment overrides, e.g. `SMARTPOST__CONFIDENCE=specificity`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::ENV_PREFIX;
use crate::error::ConfigError;
use crate::keywords::KeywordsConfig;
use crate::lexicon::SentimentLexicon;
use crate::responses::ResponsesConfig;

/// How the display confidence is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceMode {
    /// Uniform two-decimal value in the display range
    #[default]
    Random,
    /// Deterministic, grows with the matched phrase's length
    Specificity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassifierSettings {
    /// Keyword definitions file; the built-in table when unset
    #[serde(default)]
    pub keywords_path: Option<PathBuf>,
    /// Reply templates file; the built-in templates when unset
    #[serde(default)]
    pub responses_path: Option<PathBuf>,
    /// Sentiment word list (AFINN format); AFINN-165 when unset
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    #[serde(default)]
    pub confidence: ConfidenceMode,
}

impl ClassifierSettings {
    /// Build settings from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                    reason: "no such file".to_string(),
                });
            }
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(?settings, "Classifier settings resolved");
        Ok(settings)
    }

    /// Keyword definitions named by these settings
    pub fn keywords(&self) -> Result<KeywordsConfig, ConfigError> {
        match &self.keywords_path {
            Some(path) => KeywordsConfig::load(path),
            None => KeywordsConfig::builtin(),
        }
    }

    /// Reply templates named by these settings
    pub fn responses(&self) -> Result<ResponsesConfig, ConfigError> {
        match &self.responses_path {
            Some(path) => ResponsesConfig::load(path),
            None => ResponsesConfig::builtin(),
        }
    }

    /// Sentiment lexicon named by these settings
    pub fn lexicon(&self) -> Result<Arc<SentimentLexicon>, ConfigError> {
        match &self.lexicon_path {
            Some(path) => SentimentLexicon::load(path).map(Arc::new),
            None => SentimentLexicon::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.confidence, ConfidenceMode::Random);
        assert!(settings.keywords_path.is_none());
        assert!(settings.keywords().unwrap().len() > 400);
        assert!(settings.responses().is_ok());
        assert!(settings.lexicon().unwrap().len() > 3300);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "confidence: specificity").unwrap();

        let settings = ClassifierSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.confidence, ConfidenceMode::Specificity);
        assert!(settings.responses_path.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ClassifierSettings::load(Some(Path::new("/nonexistent/smartpost.yaml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_custom_keywords_path() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "keywords:\n  - {{ phrase: \"late\", category: \"Delay in Delivery\", priority: Medium }}"
        )
        .unwrap();

        let settings = ClassifierSettings {
            keywords_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(settings.keywords().unwrap().len(), 1);
    }

    #[test]
    fn test_custom_lexicon_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "late\t-2").unwrap();

        let settings = ClassifierSettings {
            lexicon_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let lexicon = settings.lexicon().unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.weight("late"), -2);
    }
}
