//! King safety filter.

use crate::board::{Board, Piece, Square};

use super::attacks::{is_guarded_piece, is_square_attacked_by};
use super::movegen::king_steps;

/// Legal destinations for `king`: neighbouring squares that are neither attacked
/// nor holding a defended enemy piece.
///
/// Attacks are evaluated with the king lifted off its square, so a slider
/// checking along a line also covers the square behind the king.
pub fn king_moves(board: &Board, king: &Piece) -> Vec<Square> {
    debug_assert!(king.is_king());
    let enemy = king.color.opposite();
    let vacated = board.without(king.square);

    king_steps(board, king)
        .into_iter()
        .filter(|&target| {
            if is_square_attacked_by(&vacated, target, enemy) {
                return false;
            }
            let captures_enemy = vacated.color_at(target) == Some(enemy);
            !(captures_enemy && is_guarded_piece(&vacated, target, enemy))
        })
        .collect()
}
