//! Chess Rules Core Library
//!
//! Tracks the board, generates moves per piece, keeps kings out of attacked
//! squares and forces a checked side to answer the check on its next move.
//! Front ends drive a [`Game`] by reporting selected squares and listening on a
//! [`BoardObserver`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use config::{CheckLinePolicy, EngineConfig};
pub use error::{Error, Result};
pub use game::{BoardObserver, ClickOutcome, Event, EventLog, Game, GameState, Protection, Turn};

/// Creates a game from the standard starting position
pub fn starting_game() -> Game {
    Game::standard()
}
