//! Everything the game remembers between clicks.

use serde::Serialize;

use crate::board::{Board, Color, PieceKind, Square};
use crate::error::{Error, Result};

use super::check::Protection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    #[default]
    WhiteToMove,
    BlackToMove,
}

impl Turn {
    pub fn color(self) -> Color {
        match self {
            Turn::WhiteToMove => Color::White,
            Turn::BlackToMove => Color::Black,
        }
    }

    pub fn toggled(self) -> Turn {
        match self {
            Turn::WhiteToMove => Turn::BlackToMove,
            Turn::BlackToMove => Turn::WhiteToMove,
        }
    }
}

impl From<Color> for Turn {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Turn::WhiteToMove,
            Color::Black => Turn::BlackToMove,
        }
    }
}

/// Cached king squares, kept equal to the kings on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KingPositions {
    pub white: Square,
    pub black: Square,
}

impl KingPositions {
    pub fn get(&self, color: Color) -> Square {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn set(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white = square,
            Color::Black => self.black = square,
        }
    }
}

/// A selected piece and the destinations highlighted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) kings: KingPositions,
    pub(crate) turn: Turn,
    pub(crate) protection: Protection,
    pub(crate) selection: Option<Selection>,
}

impl GameState {
    /// Starts a game on `board` with `to_move` to play. The board must hold exactly
    /// one king per colour.
    pub fn new(board: Board, to_move: Color) -> Result<Self> {
        let white = single_king(&board, Color::White)?;
        let black = single_king(&board, Color::Black)?;
        Ok(Self {
            board,
            kings: KingPositions { white, black },
            turn: to_move.into(),
            protection: Protection::Normal,
            selection: None,
        })
    }

    pub fn standard() -> Self {
        Self::new(Board::standard(), Color::White).expect("standard board has both kings")
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn side_to_move(&self) -> Color {
        self.turn.color()
    }

    pub fn protection(&self) -> &Protection {
        &self.protection
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.kings.get(color)
    }

    pub fn kings(&self) -> KingPositions {
        self.kings
    }

    /// Checks that the cached king squares agree with the board.
    ///
    /// # Panics
    /// Panics when they disagree; that is a bug in move execution.
    pub(crate) fn assert_kings_cached(&self) {
        for color in [Color::White, Color::Black] {
            let square = self.kings.get(color);
            let on_board = self.board.get(square);
            assert!(
                on_board.is_some_and(|p| p.kind == PieceKind::King && p.color == color),
                "{color} king cache points at {square}, which holds {on_board:?}"
            );
        }
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square> {
    let mut kings = board.pieces_of(color).filter(|p| p.is_king());
    let first = kings.next().ok_or(Error::MissingKing(color))?;
    if kings.next().is_some() {
        return Err(Error::DuplicateKing(color));
    }
    Ok(first.square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_toggles_between_sides() {
        let turn = Turn::default();
        assert_eq!(turn.color(), Color::White);
        assert_eq!(turn.toggled(), Turn::BlackToMove);
        assert_eq!(turn.toggled().toggled(), Turn::WhiteToMove);
    }

    #[test]
    fn test_new_state_caches_kings() {
        let state = GameState::standard();
        assert_eq!(state.king_square(Color::White), "e1".parse().unwrap());
        assert_eq!(state.king_square(Color::Black), "e8".parse().unwrap());
        assert_eq!(state.turn(), Turn::WhiteToMove);
        assert!(state.selection().is_none());
        state.assert_kings_cached();
    }

    #[test]
    fn test_boards_without_one_king_each_are_rejected() {
        let no_black = Board::from_placement("8/8/8/8/8/8/8/4K3").unwrap();
        assert!(matches!(
            GameState::new(no_black, Color::White),
            Err(Error::MissingKing(Color::Black))
        ));

        let two_white = Board::from_placement("4k3/8/8/8/8/8/8/K3K3").unwrap();
        assert!(matches!(
            GameState::new(two_white, Color::White),
            Err(Error::DuplicateKing(Color::White))
        ));
    }
}
