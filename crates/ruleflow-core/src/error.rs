//! Error types for ruleflow

use thiserror::Error;

/// Error raised while evaluating conditions, running actions or dispatching events
#[derive(Error, Debug)]
pub enum RuleError {
    /// Operator tag outside the supported set
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Operator applied to operands it cannot compare
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Failure raised by a condition
    #[error("Condition failed: {0}")]
    Condition(String),

    /// Failure raised by an action
    #[error("Action failed: {0}")]
    Action(String),

    /// Failure raised by an event handler
    #[error("Handler failed: {0}")]
    Handler(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error raised by consumer code
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RuleError>;
