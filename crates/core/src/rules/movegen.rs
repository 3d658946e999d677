//! Per-kind move generation against the live board.
//!
//! Results are only valid until the board is next mutated.

use tracing::trace;

use crate::board::{Board, Offset, Piece, PieceKind, Square, KING_STEPS, KNIGHT_JUMPS};

use super::king::king_moves;

/// Destinations `piece` may move to. Kings go through the safety filter; every
/// other kind is pseudo-legal.
pub fn possible_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Knight => jump_moves(board, piece, &KNIGHT_JUMPS),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            slide_moves(board, piece, piece.kind.slide_dirs())
        }
        PieceKind::King => king_moves(board, piece),
    };
    trace!(piece = %piece, count = moves.len(), "generated moves");
    moves
}

/// Squares `piece` threatens, whether or not anything stands there.
///
/// Pawns threaten their two diagonals, kings threaten nothing, and every other
/// kind threatens exactly its possible moves.
pub fn threats(board: &Board, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => attack_positions(piece),
        PieceKind::King => Vec::new(),
        _ => possible_moves(board, piece),
    }
}

/// The pawn's diagonal capture squares, regardless of occupancy.
pub fn attack_positions(piece: &Piece) -> Vec<Square> {
    piece
        .pawn_capture_offsets()
        .iter()
        .filter_map(|&o| piece.square.offset(o))
        .collect()
}

fn pawn_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let forward = piece.pawn_forward();

    if let Some(one) = piece.square.offset(forward) {
        if !board.is_occupied(one) {
            moves.push(one);
            if piece.square.y() == piece.pawn_home_rank() {
                if let Some(two) = piece.square.offset(forward.scaled(2)) {
                    if !board.is_occupied(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for target in attack_positions(piece) {
        if board.color_at(target) == Some(piece.color.opposite()) {
            moves.push(target);
        }
    }
    moves
}

/// Single-step moves (knight jumps, king steps): in bounds and not onto a friend.
pub(crate) fn jump_moves(board: &Board, piece: &Piece, offsets: &[Offset]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&o| piece.square.offset(o))
        .filter(|&sq| board.color_at(sq) != Some(piece.color))
        .collect()
}

/// Unfiltered king candidates: the eight neighbours not held by a friend.
pub(crate) fn king_steps(board: &Board, piece: &Piece) -> Vec<Square> {
    jump_moves(board, piece, &KING_STEPS)
}

fn slide_moves(board: &Board, piece: &Piece, dirs: &[Offset]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &dir in dirs {
        let mut cur = piece.square;
        while let Some(next) = cur.offset(dir) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(color) if color != piece.color => {
                    moves.push(next);
                    break;
                }
                Some(_) => break,
            }
            cur = next;
        }
    }
    moves
}
