//! Error types for the game engine.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("pop from an empty stack")]
    EmptyStack,

    #[error("move '{mv}' is not legal in the current state")]
    IllegalMove { mv: String },

    #[error("board length {length} is out of range (must be 1-5)")]
    InvalidBoardLength { length: u8 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no moves available: the game is over")]
    NoMovesAvailable,
}

impl Error {
    /// Build an `IllegalMove` from anything printable.
    pub fn illegal_move(mv: impl std::fmt::Display) -> Self {
        Error::IllegalMove { mv: mv.to_string() }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
