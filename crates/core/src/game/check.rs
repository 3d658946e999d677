//! Check detection and the forced-protection constraint.

use serde::Serialize;

use crate::board::{Board, Color, Piece, Square};
use crate::config::CheckLinePolicy;
use crate::rules::threats;

/// Whether the side to move must answer a check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Protection {
    #[default]
    Normal,
    /// `side` is in check; its next non-king move must land on `line`.
    MustBlockOrCapture { side: Color, line: Vec<Square> },
}

impl Protection {
    pub fn is_active(&self) -> bool {
        matches!(self, Protection::MustBlockOrCapture { .. })
    }

    /// The constraining line, if one applies to `color`.
    pub fn line_for(&self, color: Color) -> Option<&[Square]> {
        match self {
            Protection::MustBlockOrCapture { side, line } if *side == color => Some(line),
            _ => None,
        }
    }

    /// Narrows `moves` for `piece` to the constraining line. Kings are exempt and
    /// so is any side the constraint does not name.
    pub fn restrict(&self, piece: &Piece, moves: Vec<Square>) -> Vec<Square> {
        if piece.is_king() {
            return moves;
        }
        match self.line_for(piece.color) {
            Some(line) if !line.is_empty() => {
                moves.into_iter().filter(|sq| line.contains(sq)).collect()
            }
            _ => moves,
        }
    }
}

/// Squares from `king` towards `checker`, both ends included, stepping by the sign
/// of each coordinate delta. The walk stops early if it would leave the board,
/// which happens when the checker is not on a line with the king.
pub fn protection_line(king: Square, checker: Square) -> Vec<Square> {
    let step = king.step_towards(checker);
    let mut line = vec![king];
    let mut cur = king;
    while cur != checker {
        match cur.offset(step) {
            Some(next) => {
                line.push(next);
                cur = next;
            }
            None => break,
        }
    }
    line
}

/// Looks for a check delivered by `moved` (already standing on its destination)
/// against the king on `enemy_king`, returning the constraining line if so.
pub fn detect_check(
    board: &Board,
    moved: &Piece,
    enemy_king: Square,
    policy: CheckLinePolicy,
) -> Option<Vec<Square>> {
    if !threats(board, moved).contains(&enemy_king) {
        return None;
    }
    let line = match policy {
        CheckLinePolicy::CaptureOnlyForLeapers if !moved.kind.is_slider() => vec![moved.square],
        _ => protection_line(enemy_king, moved.square),
    };
    Some(line)
}
