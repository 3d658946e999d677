//! Board representation: squares, pieces and the board store.

mod piece;
mod square;
mod store;

pub use piece::{
    Color, Piece, PieceKind, BISHOP_DIRS, KING_STEPS, KNIGHT_JUMPS, QUEEN_DIRS, ROOK_DIRS,
};
pub use square::{Offset, Square, BOARD_SIZE};
pub use store::{Board, STANDARD_PLACEMENT};
