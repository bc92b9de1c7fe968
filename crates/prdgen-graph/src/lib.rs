//! # prdgen-graph
//!
//! Task dependency graph for prdgen sessions.
//!
//! Tasks are derived from the product context at session creation and may
//! be added later; dependencies form a DAG enforced at insertion time, and
//! status transitions are gated on dependency completion.

mod graph;
mod seed;
mod summary;

pub use graph::TaskGraph;
pub use seed::derive_initial;
pub use summary::summarize;
