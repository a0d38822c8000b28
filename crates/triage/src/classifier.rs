//! Complaint classifier
//!
//! Combines the keyword table, a sentiment scorer and the triage policy into
//! a single call per complaint. Shared across request handlers via `Arc`;
//! feedback updates the keyword table in place.

use smartpost_config::ClassifierSettings;
use smartpost_core::{
    Category, ClassificationResult, Clock, ConfidenceSource, Language, Priority, Result,
    SentimentScorer, SystemClock,
};
use smartpost_text_processing::{KeywordEntry, KeywordTable, LexiconSentimentScorer};
use std::sync::Arc;

use crate::confidence::{create_confidence_source, RandomConfidence};
use crate::feedback::FeedbackUpdate;
use crate::policy;
use crate::response::{self, ResponseCatalog};

pub struct ComplaintClassifier {
    keywords: Arc<KeywordTable>,
    responses: ResponseCatalog,
    scorer: Arc<dyn SentimentScorer>,
    clock: Arc<dyn Clock>,
    confidence: Arc<dyn ConfidenceSource>,
}

impl ComplaintClassifier {
    /// Classifier with the given sentiment scorer, system clock and random
    /// confidence
    pub fn new(
        keywords: Arc<KeywordTable>,
        responses: ResponseCatalog,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            keywords,
            responses,
            scorer,
            clock: Arc::new(SystemClock),
            confidence: Arc::new(RandomConfidence),
        }
    }

    /// Classifier over the shipped keyword table, reply templates and
    /// AFINN-165 lexicon
    pub fn builtin() -> Result<Self> {
        let keywords = KeywordTable::builtin()?;
        let responses = ResponseCatalog::builtin()?;
        let scorer = LexiconSentimentScorer::builtin()?;
        Ok(Self::new(Arc::new(keywords), responses, Arc::new(scorer)))
    }

    /// Classifier wired from layered settings
    pub fn from_settings(settings: &ClassifierSettings) -> Result<Self> {
        let keywords = KeywordTable::from_config(&settings.keywords()?)?;
        let responses = ResponseCatalog::new(settings.responses()?)?;
        let scorer = LexiconSentimentScorer::new(settings.lexicon()?);

        tracing::info!(
            keywords = keywords.len(),
            lexicon_words = scorer.vocabulary_size(),
            confidence = ?settings.confidence,
            "Complaint classifier initialized"
        );

        Ok(Self::new(Arc::new(keywords), responses, Arc::new(scorer))
            .with_confidence(create_confidence_source(settings.confidence)))
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_confidence(mut self, confidence: Arc<dyn ConfidenceSource>) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn keyword_table(&self) -> &Arc<KeywordTable> {
        &self.keywords
    }

    pub fn responses(&self) -> &ResponseCatalog {
        &self.responses
    }

    /// Classify a complaint.
    ///
    /// Returns `None` for absent or empty text. Any other input, including
    /// whitespace or text with no known keyword, gets a full result.
    pub fn classify(&self, text: Option<&str>, has_image: bool) -> Option<ClassificationResult> {
        let text = text.filter(|t| !t.is_empty())?;

        let keyword = self.keywords.find_best_match(text);
        let score = self.scorer.score(text);
        let sentiment = policy::sentiment_label(score);

        let (category, keyword_priority, language) = match &keyword {
            Some(entry) => (entry.category, Some(entry.priority), entry.language),
            None => (Category::Others, None, Language::English),
        };
        let priority = policy::resolve_priority(keyword_priority, score);

        let response_options = self.responses.select(category, language, has_image);
        let suggested_response = response::suggested_reply(&response_options);
        let explanation = response::explanation(category, keyword.as_ref(), has_image);
        let confidence = self
            .confidence
            .confidence(keyword.as_ref().map(|k| k.phrase.as_str()));
        let sla_deadline = policy::sla_deadline(priority, self.clock.now());

        tracing::debug!(
            category = %category,
            priority = %priority,
            keyword = keyword.as_ref().map(|k| k.phrase.as_str()).unwrap_or("-"),
            language = %language,
            score,
            escalated = keyword_priority.unwrap_or_default() != priority,
            has_image,
            "Complaint classified"
        );

        Some(ClassificationResult {
            category,
            priority,
            sentiment,
            score,
            detected_keyword: keyword.map(|k| k.phrase),
            detected_language: language,
            suggested_response,
            response_options,
            confidence,
            explanation,
            sla_deadline,
        })
    }

    /// Apply an operator correction to the keyword table
    pub fn apply_feedback(&self, update: &FeedbackUpdate) -> Result<()> {
        let entry = update.to_entry()?;
        self.upsert(entry)
    }

    /// Insert or overwrite an English keyword
    pub fn record_keyword(&self, phrase: &str, category: Category, priority: Priority) -> Result<()> {
        let entry = KeywordEntry::new(phrase, category, priority, Language::English)?;
        self.upsert(entry)
    }

    fn upsert(&self, entry: KeywordEntry) -> Result<()> {
        let phrase = entry.phrase.clone();
        let category = entry.category;
        let priority = entry.priority;

        let previous = self.keywords.upsert(entry)?;
        tracing::info!(
            keyword = %phrase,
            category = %category,
            priority = %priority,
            replaced = previous.is_some(),
            "Keyword learned from feedback"
        );
        Ok(())
    }
}
