//! Applicability predicates for catalog questions
//!
//! A question's relevance is data, not code: a `Condition` is a composable
//! expression tree over product context fields and prior answers, evaluated
//! by a small recursive interpreter. This keeps the catalog declarative
//! without any runtime reflection.

use prdgen_core::{AnswerValue, Complexity, Industry, ProductContext, ProductType};
use serde::{Deserialize, Serialize};

/// Read access to recorded answers during predicate evaluation
///
/// Implemented by the engine's answer store; conditions never mutate.
pub trait AnswerLookup {
    fn answer(&self, key: &str) -> Option<&AnswerValue>;
}

/// Composable applicability predicate over context and prior answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Always applicable
    Always,
    /// All sub-conditions must hold
    All(Vec<Condition>),
    /// At least one sub-condition must hold
    Any(Vec<Condition>),
    /// Negation
    Not(Box<Condition>),
    /// Product type is one of the listed types
    ProductIn(Vec<ProductType>),
    /// Industry is set and one of the listed industries
    IndustryIn(Vec<Industry>),
    /// Complexity is at or above the threshold
    ComplexityAtLeast(Complexity),
    /// The answer recorded for `key` equals `value`
    AnswerEquals { key: String, value: AnswerValue },
    /// The answer recorded for `key` contains `value` (multi-choice
    /// membership, or substring for text answers)
    AnswerContains { key: String, value: String },
}

impl Condition {
    /// Evaluate this predicate against the session context and answers
    pub fn evaluate(&self, context: &ProductContext, answers: &dyn AnswerLookup) -> bool {
        match self {
            Self::Always => true,
            Self::All(conditions) => conditions.iter().all(|c| c.evaluate(context, answers)),
            Self::Any(conditions) => conditions.iter().any(|c| c.evaluate(context, answers)),
            Self::Not(condition) => !condition.evaluate(context, answers),
            Self::ProductIn(types) => types.contains(&context.product_type),
            Self::IndustryIn(industries) => context
                .industry
                .map(|i| industries.contains(&i))
                .unwrap_or(false),
            Self::ComplexityAtLeast(threshold) => context.complexity >= *threshold,
            Self::AnswerEquals { key, value } => {
                answers.answer(key).map(|a| a == value).unwrap_or(false)
            }
            Self::AnswerContains { key, value } => match answers.answer(key) {
                Some(AnswerValue::MultiChoice(items)) => items.iter().any(|i| i == value),
                Some(AnswerValue::Text(text)) | Some(AnswerValue::Choice(text)) => {
                    text.contains(value.as_str())
                }
                _ => false,
            },
        }
    }

    /// Convenience constructor for the common yes/no gate
    pub fn answer_is_true(key: impl Into<String>) -> Self {
        Self::AnswerEquals {
            key: key.into(),
            value: AnswerValue::Bool(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapLookup(HashMap<String, AnswerValue>);

    impl AnswerLookup for MapLookup {
        fn answer(&self, key: &str) -> Option<&AnswerValue> {
            self.0.get(key)
        }
    }

    fn ctx() -> ProductContext {
        ProductContext::new(ProductType::WebApp, Complexity::Complex)
            .with_industry(Industry::Finance)
    }

    fn no_answers() -> MapLookup {
        MapLookup(HashMap::new())
    }

    #[test]
    fn test_context_leaves() {
        let context = ctx();
        let answers = no_answers();

        assert!(Condition::Always.evaluate(&context, &answers));
        assert!(Condition::ProductIn(vec![ProductType::WebApp, ProductType::Saas])
            .evaluate(&context, &answers));
        assert!(!Condition::ProductIn(vec![ProductType::Fintech]).evaluate(&context, &answers));
        assert!(Condition::IndustryIn(vec![Industry::Finance]).evaluate(&context, &answers));
        assert!(Condition::ComplexityAtLeast(Complexity::Moderate).evaluate(&context, &answers));
        assert!(!Condition::ComplexityAtLeast(Complexity::Enterprise).evaluate(&context, &answers));
    }

    #[test]
    fn test_industry_absent_never_matches() {
        let context = ProductContext::new(ProductType::WebApp, Complexity::Simple);
        let answers = no_answers();
        assert!(!Condition::IndustryIn(vec![Industry::Finance]).evaluate(&context, &answers));
    }

    #[test]
    fn test_answer_equals() {
        let mut map = HashMap::new();
        map.insert(
            "user_research_done".to_string(),
            AnswerValue::Bool(true),
        );
        let answers = MapLookup(map);

        assert!(Condition::answer_is_true("user_research_done").evaluate(&ctx(), &answers));
        assert!(!Condition::answer_is_true("missing_key").evaluate(&ctx(), &answers));
    }

    #[test]
    fn test_answer_contains_multi_choice() {
        let mut map = HashMap::new();
        map.insert(
            "platforms".to_string(),
            AnswerValue::MultiChoice(vec!["iOS".to_string(), "Android".to_string()]),
        );
        let answers = MapLookup(map);

        let cond = Condition::AnswerContains {
            key: "platforms".to_string(),
            value: "iOS".to_string(),
        };
        assert!(cond.evaluate(&ctx(), &answers));

        let cond = Condition::AnswerContains {
            key: "platforms".to_string(),
            value: "Web".to_string(),
        };
        assert!(!cond.evaluate(&ctx(), &answers));
    }

    #[test]
    fn test_composite_conditions() {
        let context = ctx();
        let answers = no_answers();

        let all = Condition::All(vec![
            Condition::ProductIn(vec![ProductType::WebApp]),
            Condition::ComplexityAtLeast(Complexity::Complex),
        ]);
        assert!(all.evaluate(&context, &answers));

        let any = Condition::Any(vec![
            Condition::ProductIn(vec![ProductType::Fintech]),
            Condition::IndustryIn(vec![Industry::Finance]),
        ]);
        assert!(any.evaluate(&context, &answers));

        let not = Condition::Not(Box::new(Condition::ComplexityAtLeast(Complexity::Enterprise)));
        assert!(not.evaluate(&context, &answers));
    }
}
