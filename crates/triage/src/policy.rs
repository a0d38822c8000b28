//! Triage policy: sentiment labels, priority escalation, SLA windows and
//! queue ordering

use chrono::{DateTime, Duration, Utc};
use smartpost_config::constants::{sentiment, sla};
use smartpost_core::{Priority, Sentiment};

/// Label a raw lexicon score
pub fn sentiment_label(score: i32) -> Sentiment {
    if score <= sentiment::NEGATIVE_AT_OR_BELOW {
        Sentiment::Negative
    } else if score >= sentiment::POSITIVE_AT_OR_ABOVE {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// Final priority from the keyword's priority and the sentiment score.
///
/// Strongly negative text lifts anything below Critical to High. The result
/// is never lower than the keyword priority.
pub fn resolve_priority(keyword_priority: Option<Priority>, score: i32) -> Priority {
    let base = keyword_priority.unwrap_or_default();
    if score < sentiment::ESCALATE_BELOW && base != Priority::Critical {
        base.max(Priority::High)
    } else {
        base
    }
}

/// SLA response window in hours
pub fn sla_hours(priority: Priority) -> i64 {
    match priority {
        Priority::Critical => sla::CRITICAL_HOURS,
        Priority::High => sla::HIGH_HOURS,
        Priority::Medium | Priority::Low => sla::STANDARD_HOURS,
    }
}

pub fn sla_deadline(priority: Priority, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(sla_hours(priority))
}

/// An unresolved ticket whose deadline has passed
pub fn is_sla_breached(deadline: DateTime<Utc>, now: DateTime<Utc>, resolved: bool) -> bool {
    !resolved && deadline < now
}

/// Order tickets Critical first. Tickets of equal priority keep their
/// relative order.
pub fn sort_by_urgency<T, F>(items: &mut [T], priority_of: F)
where
    F: Fn(&T) -> Priority,
{
    items.sort_by_key(|item| std::cmp::Reverse(priority_of(item).weight()));
}
