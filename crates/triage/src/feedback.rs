//! Operator corrections to the keyword table

use serde::{Deserialize, Serialize};
use smartpost_core::{Category, Language, Priority, Result};
use smartpost_text_processing::KeywordEntry;

/// Correction submitted from the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackUpdate {
    pub keyword: String,
    pub correct_category: String,
    pub correct_priority: String,
}

impl FeedbackUpdate {
    pub fn new(
        keyword: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            correct_category: category.into(),
            correct_priority: priority.into(),
        }
    }

    /// Validate into a table entry. Operator keywords are always English.
    pub fn to_entry(&self) -> Result<KeywordEntry> {
        let category: Category = self.correct_category.parse()?;
        let priority: Priority = self.correct_priority.parse()?;
        KeywordEntry::new(&self.keyword, category, priority, Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpost_core::Error;

    #[test]
    fn test_deserialize_dashboard_payload() {
        let json = r#"{"keyword":"Refund","correctCategory":"Wrong Delivery","correctPriority":"High"}"#;
        let update: FeedbackUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.correct_category, "Wrong Delivery");

        let entry = update.to_entry().unwrap();
        assert_eq!(entry.phrase, "refund");
        assert_eq!(entry.category, Category::WrongDelivery);
        assert_eq!(entry.priority, Priority::High);
        assert_eq!(entry.language, Language::English);
    }

    #[test]
    fn test_rejects_bad_labels() {
        let update = FeedbackUpdate::new("refund", "Refunds", "High");
        assert!(matches!(update.to_entry(), Err(Error::UnknownCategory(_))));

        let update = FeedbackUpdate::new("refund", "Others", "Urgent");
        assert!(matches!(update.to_entry(), Err(Error::UnknownPriority(_))));
    }

    #[test]
    fn test_rejects_empty_keyword() {
        let update = FeedbackUpdate::new("   ", "Others", "Low");
        assert!(matches!(update.to_entry(), Err(Error::InvalidKeyword(_))));
    }
}
