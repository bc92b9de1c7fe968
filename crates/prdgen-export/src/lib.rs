//! # prdgen-export
//!
//! Export adapters for generated documents: markdown, plain text, and a
//! pdf placeholder that degrades to text until a typeset backend exists.

mod render;

pub use render::{render, ExportFormat};
