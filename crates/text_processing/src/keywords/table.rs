//! Shared keyword table
//!
//! Readers take an `Arc` snapshot and scan it without holding the lock. The
//! feedback path builds a new snapshot and swaps it in, so a reader sees the
//! table either entirely before or entirely after an upsert.

use parking_lot::RwLock;
use regex::Regex;
use smartpost_config::KeywordsConfig;
use smartpost_core::Result;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use super::{boundary_pattern, KeywordEntry};

#[derive(Debug, Clone)]
struct CompiledKeyword {
    entry: KeywordEntry,
    char_len: usize,
    pattern: Regex,
}

impl CompiledKeyword {
    fn compile(entry: KeywordEntry) -> Result<Self> {
        let pattern = boundary_pattern(&entry.phrase)?;
        Ok(Self {
            char_len: entry.char_len(),
            entry,
            pattern,
        })
    }
}

/// Longest phrase first; equal lengths in alphabetical order
fn precedence(a: &CompiledKeyword, b: &CompiledKeyword) -> Ordering {
    b.char_len
        .cmp(&a.char_len)
        .then_with(|| a.entry.phrase.cmp(&b.entry.phrase))
}

/// Immutable, precedence-ordered view of the table
#[derive(Debug, Clone, Default)]
pub struct KeywordSnapshot {
    keywords: Vec<CompiledKeyword>,
}

impl KeywordSnapshot {
    fn from_compiled(mut keywords: Vec<CompiledKeyword>) -> Self {
        keywords.sort_by(precedence);
        Self { keywords }
    }

    /// Most specific entry whose phrase occurs as a whole word in `text`
    pub fn find(&self, text: &str) -> Option<&KeywordEntry> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| k.pattern.is_match(&lowered))
            .map(|k| &k.entry)
    }

    pub fn get(&self, phrase: &str) -> Option<&KeywordEntry> {
        let phrase = phrase.trim().to_lowercase();
        self.keywords
            .iter()
            .find(|k| k.entry.phrase == phrase)
            .map(|k| &k.entry)
    }

    /// Entries in match precedence order
    pub fn entries(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.keywords.iter().map(|k| &k.entry)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Copy of this snapshot with `compiled` inserted or replacing its phrase
    fn with_upsert(&self, compiled: CompiledKeyword) -> (Self, Option<KeywordEntry>) {
        let mut keywords = self.keywords.clone();
        let previous = keywords
            .iter()
            .position(|k| k.entry.phrase == compiled.entry.phrase)
            .map(|pos| keywords.remove(pos).entry);

        let at = keywords
            .binary_search_by(|probe| precedence(probe, &compiled))
            .unwrap_or_else(|pos| pos);
        keywords.insert(at, compiled);

        (Self { keywords }, previous)
    }
}

/// Thread-safe phrase → {category, priority, language} table
#[derive(Debug, Default)]
pub struct KeywordTable {
    current: RwLock<Arc<KeywordSnapshot>>,
}

impl KeywordTable {
    /// Build a table from entries in definition order.
    ///
    /// A phrase defined twice keeps its last definition; each replacement is
    /// logged as a data-quality warning.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = KeywordEntry>,
    {
        let mut by_phrase: HashMap<String, KeywordEntry> = HashMap::new();
        for entry in entries {
            if let Some(previous) = by_phrase.insert(entry.phrase.clone(), entry.clone()) {
                if previous != entry {
                    tracing::warn!(
                        phrase = %entry.phrase,
                        old_category = %previous.category,
                        new_category = %entry.category,
                        old_priority = %previous.priority,
                        new_priority = %entry.priority,
                        "Duplicate keyword definition, last one wins"
                    );
                }
            }
        }

        let compiled = by_phrase
            .into_values()
            .map(CompiledKeyword::compile)
            .collect::<Result<Vec<_>>>()?;

        let snapshot = KeywordSnapshot::from_compiled(compiled);
        tracing::info!(keywords = snapshot.len(), "Keyword table built");

        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
        })
    }

    pub fn from_config(config: &KeywordsConfig) -> Result<Self> {
        let entries = config
            .keywords
            .iter()
            .map(KeywordEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Table built from the shipped keyword definitions
    pub fn builtin() -> Result<Self> {
        let config = KeywordsConfig::builtin()?;
        Self::from_config(&config)
    }

    /// Current snapshot; cheap to take, stays valid across later upserts
    pub fn snapshot(&self) -> Arc<KeywordSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Most specific matching entry for `text`, if any
    pub fn find_best_match(&self, text: &str) -> Option<KeywordEntry> {
        self.snapshot().find(text).cloned()
    }

    /// Insert or overwrite a single entry, returning the one it replaced
    pub fn upsert(&self, entry: KeywordEntry) -> Result<Option<KeywordEntry>> {
        let compiled = CompiledKeyword::compile(entry)?;

        let mut current = self.current.write();
        let (next, previous) = current.with_upsert(compiled);
        *current = Arc::new(next);

        Ok(previous)
    }

    pub fn get(&self, phrase: &str) -> Option<KeywordEntry> {
        self.snapshot().get(phrase).cloned()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpost_core::{Category, Language, Priority};

    fn entry(phrase: &str, category: Category, priority: Priority) -> KeywordEntry {
        KeywordEntry::new(phrase, category, priority, Language::English).unwrap()
    }

    fn small_table() -> KeywordTable {
        KeywordTable::from_entries(vec![
            entry("missing", Category::LostPackage, Priority::High),
            entry("missing package", Category::LostPackage, Priority::Critical),
            entry("late", Category::DelayInDelivery, Priority::Medium),
            entry("rude", Category::StaffBehavior, Priority::High),
        ])
        .unwrap()
    }

    #[test]
    fn test_longest_match_wins() {
        let table = small_table();
        let hit = table.find_best_match("my missing package is late").unwrap();
        assert_eq!(hit.phrase, "missing package");
        assert_eq!(hit.priority, Priority::Critical);
    }

    #[test]
    fn test_shorter_phrase_when_longer_absent() {
        let table = small_table();
        let hit = table.find_best_match("the letter is missing").unwrap();
        assert_eq!(hit.phrase, "missing");
    }

    #[test]
    fn test_no_match() {
        let table = small_table();
        assert!(table.find_best_match("chocolate and classifying").is_none());
        assert!(table.find_best_match("").is_none());
    }

    #[test]
    fn test_snapshot_order() {
        let table = small_table();
        let snapshot = table.snapshot();
        let phrases: Vec<_> = snapshot.entries().map(|e| e.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["missing package", "missing", "late", "rude"]);
    }

    #[test]
    fn test_last_definition_wins() {
        let table = KeywordTable::from_entries(vec![
            entry("mistake", Category::WrongDelivery, Priority::Medium),
            entry("mistake", Category::Others, Priority::Low),
        ])
        .unwrap();

        assert_eq!(table.len(), 1);
        let hit = table.find_best_match("a mistake").unwrap();
        assert_eq!(hit.category, Category::Others);
        assert_eq!(hit.priority, Priority::Low);
    }

    #[test]
    fn test_upsert_insert_and_replace() {
        let table = small_table();

        let previous = table
            .upsert(entry("refund", Category::WrongDelivery, Priority::High))
            .unwrap();
        assert!(previous.is_none());
        assert_eq!(table.len(), 5);

        let previous = table
            .upsert(entry("late", Category::Others, Priority::Low))
            .unwrap()
            .unwrap();
        assert_eq!(previous.category, Category::DelayInDelivery);
        assert_eq!(table.len(), 5);
        assert_eq!(table.get("LATE").unwrap().category, Category::Others);
    }

    #[test]
    fn test_upsert_keeps_precedence_order() {
        let table = small_table();
        table
            .upsert(entry("missing parcel slip", Category::Others, Priority::Low))
            .unwrap();

        let snapshot = table.snapshot();
        let lengths: Vec<_> = snapshot.entries().map(|e| e.char_len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        assert_eq!(snapshot.entries().next().unwrap().phrase, "missing parcel slip");
    }

    #[test]
    fn test_old_snapshot_unchanged_by_upsert() {
        let table = small_table();
        let before = table.snapshot();
        table
            .upsert(entry("refund", Category::Others, Priority::Medium))
            .unwrap();

        assert_eq!(before.len(), 4);
        assert!(before.get("refund").is_none());
        assert!(table.get("refund").is_some());
    }

    #[test]
    fn test_builtin_table() {
        let table = KeywordTable::builtin().unwrap();
        assert!(table.len() > 400);

        let hit = table.find_best_match("damaged product i recieved").unwrap();
        assert_eq!(hit.phrase, "damaged product");
        assert_eq!(hit.category, Category::DamagedItem);

        // Duplicates in the shipped definitions resolve to the later entry
        assert_eq!(table.get("mistake").unwrap().category, Category::Others);
        assert_eq!(table.get("attitude").unwrap().priority, Priority::Low);
    }
}
