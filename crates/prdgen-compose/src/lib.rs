//! # prdgen-compose
//!
//! Content generation pipeline: transforms a session's product context,
//! answers, and task graph into a structured [`prdgen_core::Document`],
//! ready for any export adapter to render.

mod enrich;
mod generator;

pub use enrich::{Enrich, PassthroughEnricher};
pub use generator::{generate, generate_and_record};
