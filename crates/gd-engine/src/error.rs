//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while setting up a game or reading player input.
///
/// Gameplay commands never fail; see [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The content could not be loaded or failed validation.
    #[error(transparent)]
    Content(#[from] gd_core::ContentError),

    /// Input did not name a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command that needs a number was given none.
    #[error("usage: {command} <number>")]
    MissingArgument {
        /// The command word.
        command: String,
    },

    /// A command argument is not a positive number.
    #[error("not a valid number: {0}")]
    InvalidNumber(String),
}
