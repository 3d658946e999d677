//! Attack and guard queries.

use crate::board::{Board, Color, Piece, Square, KING_STEPS};

use super::movegen::threats;

/// True iff some `attacker` piece has `square` in its threat set.
pub fn is_square_attacked_by(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|piece| threats(board, piece).contains(&square))
}

/// Squares of every `attacker` piece threatening `square`.
pub fn attackers_of(board: &Board, square: Square, attacker: Color) -> Vec<Square> {
    board
        .pieces_of(attacker)
        .filter(|piece| threats(board, piece).contains(&square))
        .map(|piece| piece.square)
        .collect()
}

/// True iff the piece on `square` would be recaptured by a `defender` piece if an
/// opponent of `defender` took it.
///
/// The query runs against a copy of the board where the square holds an opposing
/// piece, so the defender's rays and jumps reach it. The stored piece is untouched.
/// A neighbouring defender king also counts, even though kings attack nothing.
pub fn is_guarded_piece(board: &Board, square: Square, defender: Color) -> bool {
    let Some(target) = board.get(square) else {
        return false;
    };
    let mut view = board.clone();
    view.set(
        square,
        Some(Piece::new(target.kind, defender.opposite(), square)),
    );
    is_square_attacked_by(&view, square, defender) || king_adjacent(board, square, defender)
}

fn king_adjacent(board: &Board, square: Square, color: Color) -> bool {
    KING_STEPS
        .iter()
        .filter_map(|&step| square.offset(step))
        .any(|near| {
            board
                .get(near)
                .is_some_and(|p| p.is_king() && p.color == color)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_rook_attacks_along_open_file() {
        let board = Board::from_placement("4r2k/8/8/8/8/8/8/K7").unwrap();
        for name in ["e1", "e2", "e7"] {
            assert!(is_square_attacked_by(&board, sq(name), Color::Black), "{name}");
        }
        assert!(!is_square_attacked_by(&board, sq("d2"), Color::Black));
        assert!(!is_square_attacked_by(&board, sq("e1"), Color::White));
    }

    #[test]
    fn test_pawns_attack_empty_diagonals() {
        let board = Board::from_placement("7k/8/8/8/8/8/4P3/K7").unwrap();
        assert!(is_square_attacked_by(&board, sq("d3"), Color::White));
        assert!(is_square_attacked_by(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked_by(&board, sq("e3"), Color::White));
    }

    #[test]
    fn test_kings_do_not_count_as_attackers() {
        let board = Board::from_placement("7k/8/8/8/8/8/8/K7").unwrap();
        assert!(!is_square_attacked_by(&board, sq("b2"), Color::White));
        assert!(!is_square_attacked_by(&board, sq("g7"), Color::Black));
    }

    #[test]
    fn test_attackers_lists_every_threat() {
        let board = Board::from_placement("7k/8/8/8/8/2N5/8/K2R4").unwrap();
        let mut attackers = attackers_of(&board, sq("d5"), Color::White);
        attackers.sort();
        let mut expected = vec![sq("c3"), sq("d1")];
        expected.sort();
        assert_eq!(attackers, expected);
    }

    #[test]
    fn test_guarded_piece_sees_through_own_colour() {
        // Black bishop on c6 guards the knight on d5; nothing guards the pawn on a5.
        let board = Board::from_placement("7k/8/2b5/p2n4/8/8/8/K7").unwrap();
        assert!(is_guarded_piece(&board, sq("d5"), Color::Black));
        assert!(!is_guarded_piece(&board, sq("a5"), Color::Black));
        assert!(!is_guarded_piece(&board, sq("e4"), Color::Black));

        // The query leaves the board alone.
        assert_eq!(board.get(sq("d5")).unwrap().color, Color::Black);
    }

    #[test]
    fn test_pawn_guard_uses_attack_positions() {
        let board = Board::from_placement("7k/8/8/8/8/3p4/4p3/K7").unwrap();
        // The d3 pawn guards e2 diagonally.
        assert!(is_guarded_piece(&board, sq("e2"), Color::Black));
        assert!(!is_guarded_piece(&board, sq("d3"), Color::Black));
    }

    #[test]
    fn test_neighbouring_king_guards_piece() {
        let board = Board::from_placement("8/8/8/8/8/4k3/4p3/4K3").unwrap();
        assert!(is_guarded_piece(&board, sq("e2"), Color::Black));
        // A king two files away does not reach.
        let far = Board::from_placement("8/8/8/8/8/6k1/4p3/4K3").unwrap();
        assert!(!is_guarded_piece(&far, sq("e2"), Color::Black));
    }
}
