//! # prdgen-storage
//!
//! Session persistence for prdgen.
//!
//! The engine treats persistence as a black box behind [`SessionStore`];
//! this crate provides the JSON-file implementation used by the CLI and
//! an in-memory store for tests.

mod store;

pub use store::{export_path, JsonFileStore, MemoryStore, SessionStore};
