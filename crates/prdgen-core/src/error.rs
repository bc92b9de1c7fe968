//! Unified error types for prdgen

use thiserror::Error;

/// Unified error type for all prdgen operations
#[derive(Error, Debug)]
pub enum PrdError {
    // Interview errors
    #[error("Invalid answer: {0}")]
    Validation(String),

    #[error("Unknown question key: {0}")]
    UnknownQuestion(String),

    // Task graph errors
    #[error("Dependency violation: {0}")]
    DependencyViolation(String),

    #[error("Cyclic dependency: {0}")]
    CyclicDependency(String),

    #[error("Invalid dependency: {0}")]
    InvalidDependency(String),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    // Generation errors
    #[error("Session has no answers to summarize")]
    EmptySession,

    // Persistence errors
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using PrdError
pub type Result<T> = std::result::Result<T, PrdError>;
