//! Error types for declarative CLI framework

use super::context::ResolveError;
use crate::invoker::InvokerError;
use thiserror::Error;

/// Result type for declarative CLI operations
pub type DeclarativeResult<T> = Result<T, DeclarativeError>;

/// Errors that can occur in the declarative CLI framework
#[derive(Debug, Error)]
pub enum DeclarativeError {
    /// Document or flag configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed document, with the parser's own message
    #[error("Failed to parse {format} document: {message}")]
    ParseError {
        /// Document format that was attempted
        format: &'static str,
        /// Raw parser detail
        message: String,
    },

    /// Missing required argument or flag
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Invalid command line for the compiled tree
    #[error("Usage error: {0}")]
    UsageError(String),

    /// Subcommand name with no matching node
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Failure reported by the action runtime
    #[error("Action error: {0}")]
    Action(#[from] InvokerError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeclarativeError {
    /// Create a config error with context
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a parse error for the given document format
    pub fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::ParseError {
            format,
            message: err.to_string(),
        }
    }

    /// Create a usage error with context
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Self::UsageError(msg.into())
    }
}
