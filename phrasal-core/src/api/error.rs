//! Error types for the API

use crate::domain::grammar::GrammarError;
use thiserror::Error;

/// Error type for API operations.
///
/// The chunk operation itself is total and never fails; errors only arise
/// around it, from configuration, grammar loading and input handling.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Grammar definition error
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
