//! Complaint vocabularies
//!
//! Categories and priorities serialize with the labels the ticket store and
//! admin UI already use ("Lost Package", "High", ...). Languages serialize as
//! short tags ("en", "hi", ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Coarse grievance type assigned to a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Lost Package")]
    LostPackage,
    #[serde(rename = "Damaged Item")]
    DamagedItem,
    #[serde(rename = "Delay in Delivery")]
    DelayInDelivery,
    #[serde(rename = "Staff Behavior")]
    StaffBehavior,
    #[serde(rename = "Wrong Delivery")]
    WrongDelivery,
    #[default]
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::LostPackage,
        Category::DamagedItem,
        Category::DelayInDelivery,
        Category::StaffBehavior,
        Category::WrongDelivery,
        Category::Others,
    ];

    /// Label as shown to citizens and officers
    pub fn label(&self) -> &'static str {
        match self {
            Category::LostPackage => "Lost Package",
            Category::DamagedItem => "Damaged Item",
            Category::DelayInDelivery => "Delay in Delivery",
            Category::StaffBehavior => "Staff Behavior",
            Category::WrongDelivery => "Wrong Delivery",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Urgency tier. Ordering follows urgency: `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Sort weight used by the admin queue (Critical = 4 ... Low = 1)
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Priority::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownPriority(s.to_string()))
    }
}

/// Three-way sentiment label derived from the raw lexicon score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        };
        f.write_str(s)
    }
}

/// Language a keyword phrase belongs to.
///
/// Only used to pick a reply template. Matching never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "ta")]
    Tamil,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Tamil,
    ];

    /// Short tag ("en", "hi", "te", "ta")
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Tamil => "ta",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts either the tag or the English name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|l| {
                l.code().eq_ignore_ascii_case(needle) || l.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert_eq!("wrong delivery".parse::<Category>().unwrap(), Category::WrongDelivery);
        assert!("Lost Parcel".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Category::DelayInDelivery).unwrap();
        assert_eq!(json, "\"Delay in Delivery\"");

        let lang: Language = serde_json::from_str("\"te\"").unwrap();
        assert_eq!(lang, Language::Telugu);

        let priority: Priority = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(priority, Priority::Critical);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert!(matches!(
            "kn".parse::<Language>(),
            Err(Error::UnknownLanguage(_))
        ));
    }
}
