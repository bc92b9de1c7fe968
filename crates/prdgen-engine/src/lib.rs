//! # prdgen-engine
//!
//! Adaptive interview engine and session state for prdgen.
//!
//! The engine re-evaluates the question catalog after every recorded
//! answer, so the interview branches on product type, industry,
//! complexity, and prior answers without any hidden iteration state.

mod answers;
mod engine;
mod session;

pub use answers::AnswerStore;
pub use engine::QuestionEngine;
pub use session::{Session, SessionSummary};
