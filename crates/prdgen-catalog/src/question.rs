//! Question definitions and answer validation

use prdgen_core::{AnswerValue, PrdError, Result};
use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::section::Section;

/// Input shape expected for a question's answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// Free-form text
    Text,
    /// Exactly one of the listed options
    Choice { options: Vec<String> },
    /// Any subset of the listed options
    MultiChoice { options: Vec<String> },
    /// Numeric answer
    Number,
    /// Yes/no answer
    Bool,
}

/// A single question in the catalog
///
/// Definitions are immutable; the catalog is built once at process start
/// and registration order is the stable interview order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    /// Unique key identifying the question and its stored answer
    pub key: String,
    /// Prompt shown to the user
    pub prompt: String,
    /// Optional help text shown below the prompt
    pub help: Option<String>,
    pub kind: AnswerKind,
    /// Document heading this question's answer contributes to
    pub section: Section,
    /// Predicate deciding whether the question is currently relevant
    pub applies_when: Condition,
    /// Question keys that must already be answered before this is offered
    pub depends_on: Vec<String>,
}

impl QuestionDefinition {
    pub fn new(
        key: impl Into<String>,
        prompt: impl Into<String>,
        kind: AnswerKind,
        section: Section,
    ) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            help: None,
            kind,
            section,
            applies_when: Condition::Always,
            depends_on: Vec::new(),
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.applies_when = condition;
        self
    }

    pub fn with_depends_on(mut self, keys: Vec<&str>) -> Self {
        self.depends_on = keys.into_iter().map(String::from).collect();
        self
    }

    /// Check that a value matches this question's answer kind
    ///
    /// Rejects type mismatches and out-of-set choices. The failure leaves
    /// nothing recorded; the interview continues.
    pub fn validate(&self, value: &AnswerValue) -> Result<()> {
        match (&self.kind, value) {
            (AnswerKind::Text, AnswerValue::Text(_)) => Ok(()),
            (AnswerKind::Number, AnswerValue::Number(_)) => Ok(()),
            (AnswerKind::Bool, AnswerValue::Bool(_)) => Ok(()),
            (AnswerKind::Choice { options }, AnswerValue::Choice(chosen)) => {
                if options.iter().any(|o| o == chosen) {
                    Ok(())
                } else {
                    Err(PrdError::Validation(format!(
                        "'{}' is not an option for question '{}'",
                        chosen, self.key
                    )))
                }
            }
            (AnswerKind::MultiChoice { options }, AnswerValue::MultiChoice(chosen)) => {
                match chosen.iter().find(|c| !options.iter().any(|o| &o == c)) {
                    Some(bad) => Err(PrdError::Validation(format!(
                        "'{}' is not an option for question '{}'",
                        bad, self.key
                    ))),
                    None => Ok(()),
                }
            }
            (kind, value) => Err(PrdError::Validation(format!(
                "question '{}' expects {:?}, got {:?}",
                self.key, kind, value
            ))),
        }
    }
}
