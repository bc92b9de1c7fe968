//! # prdgen-core
//!
//! Core types for the prdgen PRD authoring system.
//!
//! prdgen conducts an adaptive interview about a software or business
//! product, tracks the derived work items, and turns the collected answers
//! into a structured, exportable document.
//!
//! ## Core Paradigm
//!
//! - Sessions own their answers, task graph, and document versions
//! - Question applicability is data (a predicate tree), not code
//! - Task dependencies form a DAG with status transitions gated on it
//! - Document generation is a pure function of session state

mod config;
mod error;
mod types;

pub use config::{InterviewDefaults, PrdgenConfig};
pub use error::{PrdError, Result};
pub use types::*;
