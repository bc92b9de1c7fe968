//! Adaptive question selection
//!
//! `next_questions` is a pure function of the catalog, product context,
//! and recorded answers: no iteration state is kept between calls, so the
//! interview is restartable at any point and identical inputs always
//! produce the identical ordered output.

use prdgen_catalog::{Catalog, QuestionDefinition};
use prdgen_core::ProductContext;

use crate::answers::AnswerStore;

/// Evaluates the catalog against session state to drive the interview
#[derive(Debug, Clone)]
pub struct QuestionEngine {
    catalog: Catalog,
}

impl QuestionEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Questions to offer next, in stable catalog registration order
    ///
    /// A question is offered when its applicability predicate holds, every
    /// key it depends on is already answered, and it is not itself
    /// answered. An empty result is the interview-complete signal.
    pub fn next_questions(
        &self,
        context: &ProductContext,
        answers: &AnswerStore,
    ) -> Vec<&QuestionDefinition> {
        self.catalog
            .questions()
            .iter()
            .filter(|q| q.applies_when.evaluate(context, answers))
            .filter(|q| q.depends_on.iter().all(|key| answers.contains(key)))
            .filter(|q| !answers.contains(&q.key))
            .collect()
    }

    /// Whether the interview has no more questions to offer
    pub fn interview_complete(&self, context: &ProductContext, answers: &AnswerStore) -> bool {
        self.next_questions(context, answers).is_empty()
    }

    /// All currently applicable questions, answered or not
    pub fn applicable_questions(
        &self,
        context: &ProductContext,
        answers: &AnswerStore,
    ) -> Vec<&QuestionDefinition> {
        self.catalog
            .questions()
            .iter()
            .filter(|q| q.applies_when.evaluate(context, answers))
            .collect()
    }

    /// Answered / applicable ratio at this point in the interview
    ///
    /// 1.0 when nothing is applicable; callers use this to decide whether
    /// a partially-answered document is acceptable.
    pub fn completeness(&self, context: &ProductContext, answers: &AnswerStore) -> f64 {
        let applicable = self.applicable_questions(context, answers);
        if applicable.is_empty() {
            return 1.0;
        }
        let answered = applicable
            .iter()
            .filter(|q| answers.contains(&q.key))
            .count();
        answered as f64 / applicable.len() as f64
    }
}
