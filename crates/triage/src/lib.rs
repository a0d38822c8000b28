//! SmartPost complaint triage
//!
//! Turns a citizen complaint into a category, priority, sentiment, SLA
//! deadline and a suggested reply in the citizen's language.
//!
//! # Example
//!
//! ```ignore
//! use smartpost_triage::ComplaintClassifier;
//!
//! let classifier = ComplaintClassifier::builtin()?;
//! let result = classifier.classify(Some("Mera parcel kho gaya"), false).unwrap();
//! assert_eq!(result.category.label(), "Lost Package");
//! ```

pub mod classifier;
pub mod confidence;
pub mod feedback;
pub mod policy;
pub mod response;

pub use classifier::ComplaintClassifier;
pub use confidence::{
    create_confidence_source, FixedConfidence, RandomConfidence, SpecificityConfidence,
};
pub use feedback::FeedbackUpdate;
pub use policy::{is_sla_breached, sla_deadline, sort_by_urgency};
pub use response::ResponseCatalog;
