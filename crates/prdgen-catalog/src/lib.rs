//! # prdgen-catalog
//!
//! Immutable question catalog for the prdgen interview.
//!
//! Each question carries an applicability predicate (a [`Condition`]
//! expression tree over product context and prior answers) and a section
//! assignment used by document generation. The built-in catalog is loaded
//! once at process start and never mutated at runtime.

mod builtin;
mod condition;
mod question;
mod section;

pub use builtin::{builtin_catalog, Catalog};
pub use condition::{AnswerLookup, Condition};
pub use question::{AnswerKind, QuestionDefinition};
pub use section::{section_order, Section};
