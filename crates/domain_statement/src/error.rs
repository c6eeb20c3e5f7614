//! Statement domain errors
//!
//! Every variant is fatal for the statement being computed: no partial
//! output is produced once one of these is returned.

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur while pricing or rendering a statement
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// The play's genre has no pricing rule
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play id absent from the catalog
    #[error("Play not found: {0}")]
    MissingPlay(String),

    /// Charges are in hundredths; the currency's minor unit is not
    #[error("Unsupported pricing currency: {0}")]
    UnsupportedCurrency(String),

    /// Audience size is negative or out of range
    #[error("Invalid audience size: {0}")]
    InvalidAudience(i64),

    /// Money arithmetic or formatting failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Labels could not be loaded or formatted
    #[error("Render error: {0}")]
    Render(String),
}

impl StatementError {
    /// Creates a missing play error
    pub fn missing_play(play_id: impl std::fmt::Display) -> Self {
        StatementError::MissingPlay(play_id.to_string())
    }

    /// Creates a render error
    pub fn render(message: impl Into<String>) -> Self {
        StatementError::Render(message.into())
    }
}
