//! Error types for chess-rules-core

use thiserror::Error;

use crate::board::Color;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    #[error("invalid board placement {placement:?}: {reason}")]
    InvalidPlacement { placement: String, reason: String },

    #[error("board has no {0:?} king")]
    MissingKing(Color),

    #[error("board has more than one {0:?} king")]
    DuplicateKing(Color),

    #[error("configuration parsing failed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
