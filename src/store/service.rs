//! Content store
//!
//! The single entry point presentation code talks to: read queries over the
//! seeded collections and the register, check-answer and submit-feedback
//! commands. One store is built per session and shared behind `Arc`.

use std::sync::Arc;
use chrono::NaiveDate;
use tracing::debug;
use crate::models::*;
use crate::services::assessment::{self, QuizScore};
use crate::services::feedback::{FeedbackIntake, FeedbackSink};
use crate::state::QuizSession;
use crate::store::events::EventRepository;
use crate::store::seed::SeedData;
use crate::utils::errors::{PortalError, Result};
use crate::utils::helpers::{contains_ignore_case, unique_in_order};

#[derive(Debug)]
pub struct ContentStore {
    questions: Vec<Question>,
    flashcards: Vec<FlashCard>,
    faqs: Vec<Faq>,
    downloads: Vec<Download>,
    rule_updates: Vec<RuleUpdate>,
    events: EventRepository,
    feedback: FeedbackIntake,
}

impl ContentStore {
    /// Build a store from validated seed data
    pub fn new(seed: SeedData, sink: Arc<dyn FeedbackSink>) -> Result<Self> {
        seed.validate()?;

        Ok(Self {
            questions: seed.questions,
            flashcards: seed.flashcards,
            faqs: seed.faqs,
            downloads: seed.downloads,
            rule_updates: seed.rule_updates,
            events: EventRepository::new(seed.events),
            feedback: FeedbackIntake::new(sink),
        })
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.list()
    }

    pub fn list_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn list_flashcards(&self) -> &[FlashCard] {
        &self.flashcards
    }

    pub fn list_faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn list_downloads(&self) -> &[Download] {
        &self.downloads
    }

    pub fn list_rule_updates(&self) -> &[RuleUpdate] {
        &self.rule_updates
    }

    pub fn find_event(&self, event_id: &str) -> Option<Event> {
        self.events.find_by_id(event_id)
    }

    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Register for an event. Fails with `EventNotFound` and changes nothing
    /// when the id is unknown.
    pub fn register(&self, event_id: &str, registrant: Registrant) -> Result<Registration> {
        self.events.register(event_id, registrant)
    }

    /// Check one answer. An out-of-range index is a wrong answer, not an error.
    pub fn check_answer(&self, question_id: &str, answer_index: i64) -> Result<bool> {
        let question = self.question_or_not_found(question_id)?;
        Ok(assessment::check_answer(question, answer_index))
    }

    /// Score `(question_id, answer_index)` pairs in submission order
    pub fn score_quiz<S: AsRef<str>>(&self, answers: &[(S, i64)]) -> Result<QuizScore> {
        let outcomes = answers
            .iter()
            .map(|(question_id, answer_index)| self.check_answer(question_id.as_ref(), *answer_index))
            .collect::<Result<Vec<bool>>>()?;

        Ok(assessment::score(outcomes))
    }

    /// A fresh quiz over every question in the store
    pub fn start_quiz(&self) -> QuizSession {
        QuizSession::new(self.questions.clone())
    }

    pub fn submit_feedback(&self, draft: FeedbackDraft) -> Result<FeedbackRecord> {
        self.feedback.submit(draft)
    }

    /// Events on or after `today`, soonest first
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.list().into_iter().filter(|e| e.date >= today).collect();
        events.sort_by_key(|e| (e.date, e.time));
        events
    }

    /// Events before `today`, oldest first
    pub fn past_events(&self, today: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.list().into_iter().filter(|e| e.date < today).collect();
        events.sort_by_key(|e| (e.date, e.time));
        events
    }

    pub fn flashcard_categories(&self) -> Vec<String> {
        unique_in_order(self.flashcards.iter().map(|c| c.category.as_str()))
    }

    pub fn flashcards_in_category(&self, category: &str) -> Vec<&FlashCard> {
        self.flashcards.iter().filter(|c| c.category == category).collect()
    }

    pub fn faq_categories(&self) -> Vec<String> {
        unique_in_order(self.faqs.iter().map(|f| f.category.as_str()))
    }

    pub fn download_categories(&self) -> Vec<String> {
        unique_in_order(self.downloads.iter().map(|d| d.category.as_str()))
    }

    /// FAQs whose question, answer or category contains `query`
    pub fn search_faqs(&self, query: &str) -> Vec<&Faq> {
        let query = query.trim();
        debug!(query = query, "Searching FAQs");
        self.faqs
            .iter()
            .filter(|f| {
                contains_ignore_case(&f.question, query)
                    || contains_ignore_case(&f.answer, query)
                    || contains_ignore_case(&f.category, query)
            })
            .collect()
    }

    /// Downloads whose title, description or category contains `query`
    pub fn search_downloads(&self, query: &str) -> Vec<&Download> {
        let query = query.trim();
        debug!(query = query, "Searching downloads");
        self.downloads
            .iter()
            .filter(|d| {
                contains_ignore_case(&d.title, query)
                    || contains_ignore_case(&d.description, query)
                    || contains_ignore_case(&d.category, query)
            })
            .collect()
    }

    pub fn rule_updates_newest_first(&self) -> Vec<&RuleUpdate> {
        let mut updates: Vec<&RuleUpdate> = self.rule_updates.iter().collect();
        updates.sort_by(|a, b| b.date.cmp(&a.date));
        updates
    }

    /// Collection sizes, for health output
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            questions: self.questions.len(),
            flashcards: self.flashcards.len(),
            faqs: self.faqs.len(),
            downloads: self.downloads.len(),
            rule_updates: self.rule_updates.len(),
            events: self.events.count(),
        }
    }

    fn question_or_not_found(&self, question_id: &str) -> Result<&Question> {
        self.find_question(question_id)
            .ok_or_else(|| PortalError::QuestionNotFound { question_id: question_id.to_string() })
    }
}

/// Collection sizes of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub questions: usize,
    pub flashcards: usize,
    pub faqs: usize,
    pub downloads: usize,
    pub rule_updates: usize,
    pub events: usize,
}
