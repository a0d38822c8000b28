//! Reply selection and classification explanations

use smartpost_config::{ConfigError, ResponsesConfig};
use smartpost_core::{Category, Language, ResponseOptions};
use smartpost_text_processing::KeywordEntry;

/// Reply templates with the selection rules applied on top
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    config: ResponsesConfig,
}

impl ResponseCatalog {
    /// Wrap a template set, rejecting one without the Others fallback
    pub fn new(config: ResponsesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(ResponsesConfig::builtin()?)
    }

    pub fn config(&self) -> &ResponsesConfig {
        &self.config
    }

    /// English reply for a category, falling back to the Others template
    pub fn english(&self, category: Category) -> &str {
        if let Some(text) = self.config.english(category) {
            return text;
        }
        tracing::warn!(
            category = %category,
            "Missing English reply template, using Others"
        );
        self.config.english(Category::Others).unwrap_or_default()
    }

    /// Reply options for a classified complaint.
    ///
    /// A damaged item reported with a photo gets the claims-team text in
    /// place of the English template. A regional reply is offered only for a
    /// non-English keyword whose category has a template in that language.
    pub fn select(&self, category: Category, language: Language, has_image: bool) -> ResponseOptions {
        let en = if category == Category::DamagedItem && has_image {
            self.config.damaged_with_evidence.clone()
        } else {
            self.english(category).to_string()
        };

        let regional = if language.is_english() {
            None
        } else {
            self.config.get(category, language).map(str::to_string)
        };

        ResponseOptions {
            en,
            regional,
            detected_lang: language,
        }
    }
}

/// Human-readable reason for a classification
pub fn explanation(category: Category, keyword: Option<&KeywordEntry>, has_image: bool) -> String {
    let mut text = format!("Classified as '{}' because ", category);
    match keyword {
        Some(entry) => text.push_str(&format!(
            "it contains the {} keyword '{}'.",
            entry.language.display_name(),
            entry.phrase
        )),
        None => text.push_str("no known keyword was found, so general pattern detection was used."),
    }
    if has_image {
        text.push_str(" Image evidence attached.");
    }
    text
}

/// Reply the officer should send: regional when offered, English otherwise
pub fn suggested_reply(options: &ResponseOptions) -> String {
    options.regional.clone().unwrap_or_else(|| options.en.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpost_config::constants::replies;
    use smartpost_core::Priority;

    fn catalog() -> ResponseCatalog {
        ResponseCatalog::builtin().unwrap()
    }

    #[test]
    fn test_english_only_for_english_keyword() {
        let options = catalog().select(Category::LostPackage, Language::English, false);
        assert!(options.en.contains("Level-2 search"));
        assert!(options.regional.is_none());
        assert_eq!(suggested_reply(&options), options.en);
    }

    #[test]
    fn test_regional_reply_preferred() {
        let options = catalog().select(Category::LostPackage, Language::Hindi, false);
        let regional = options.regional.clone().unwrap();
        assert!(regional.starts_with("Priya Grahak"));
        assert_eq!(suggested_reply(&options), regional);
        assert_eq!(options.detected_lang, Language::Hindi);
    }

    #[test]
    fn test_tamil_falls_back_to_english() {
        let options = catalog().select(Category::DelayInDelivery, Language::Tamil, false);
        assert!(options.regional.is_none());
        assert_eq!(suggested_reply(&options), options.en);
    }

    #[test]
    fn test_damaged_with_photo_override() {
        let with_photo = catalog().select(Category::DamagedItem, Language::English, true);
        assert_eq!(with_photo.en, replies::DAMAGED_WITH_EVIDENCE);

        let without = catalog().select(Category::DamagedItem, Language::English, false);
        assert!(without.en.contains("upload photos"));

        // Photo on a non-damage complaint changes nothing
        let other = catalog().select(Category::WrongDelivery, Language::English, true);
        assert!(other.en.contains("mix-up"));
    }

    #[test]
    fn test_missing_template_uses_others() {
        let config = ResponsesConfig::from_yaml("templates:\n  Others:\n    en: \"Looking into it\"\n")
            .unwrap();
        let catalog = ResponseCatalog::new(config).unwrap();
        let options = catalog.select(Category::StaffBehavior, Language::Hindi, false);
        assert_eq!(options.en, "Looking into it");
        assert!(options.regional.is_none());
    }

    #[test]
    fn test_catalog_requires_others() {
        assert!(ResponseCatalog::new(ResponsesConfig::default()).is_err());
    }

    #[test]
    fn test_explanation_text() {
        let entry =
            KeywordEntry::new("kho gaya", Category::LostPackage, Priority::High, Language::Hindi)
                .unwrap();
        assert_eq!(
            explanation(Category::LostPackage, Some(&entry), false),
            "Classified as 'Lost Package' because it contains the Hindi keyword 'kho gaya'."
        );

        let tamil =
            KeywordEntry::new("thaamadham", Category::DelayInDelivery, Priority::Medium, Language::Tamil)
                .unwrap();
        assert!(explanation(Category::DelayInDelivery, Some(&tamil), false).contains("Tamil keyword"));

        let none = explanation(Category::Others, None, true);
        assert!(none.contains("general pattern detection"));
        assert!(none.ends_with("Image evidence attached."));
    }
}
