//! Ordered answer store
//!
//! Answers keep their insertion order for display and audit; overwriting
//! an existing key updates the value and timestamp in place without
//! changing position. Answers are never removed: a prior answer whose
//! question later became inapplicable stays as historical record.

use chrono::Utc;
use prdgen_catalog::AnswerLookup;
use prdgen_core::{Answer, AnswerValue};
use serde::{Deserialize, Serialize};

/// Append/overwrite mapping from question key to answer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerStore {
    answers: Vec<Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting in place if the key already exists
    pub fn record(&mut self, question_key: impl Into<String>, value: AnswerValue) {
        let question_key = question_key.into();
        match self.answers.iter_mut().find(|a| a.question_key == question_key) {
            Some(existing) => {
                existing.value = value;
                existing.answered_at = Utc::now();
            }
            None => self.answers.push(Answer::new(question_key, value)),
        }
    }

    /// Look up an answer value by question key
    pub fn get(&self, question_key: &str) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|a| a.question_key == question_key)
            .map(|a| &a.value)
    }

    pub fn contains(&self, question_key: &str) -> bool {
        self.get(question_key).is_some()
    }

    /// Answers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl AnswerLookup for AnswerStore {
    fn answer(&self, key: &str) -> Option<&AnswerValue> {
        self.get(key)
    }
}
