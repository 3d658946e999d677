//! Board store: the single source of truth for which piece stands where.

use std::collections::BTreeMap;
use std::fmt;

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;
use crate::error::{Error, Result};

/// Standard starting array, listed from rank 8 (`y = 0`) down to rank 1.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Sparse mapping from square to piece. Empty squares are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        Self::from_placement(STANDARD_PLACEMENT).expect("standard placement is well-formed")
    }

    /// Parses a piece-placement string: eight rows separated by `/`, listed from
    /// `y = 0`, uppercase letters for White, lowercase for Black, digits for runs
    /// of empty squares.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPlacement {
            placement: placement.to_string(),
            reason,
        };

        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(invalid(format!("expected 8 rows, found {}", rows.len())));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0u8;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(invalid(format!("bad empty run {c:?} in row {}", y + 1)));
                    }
                    x += run as u8;
                } else {
                    let kind = PieceKind::from_letter(c)
                        .ok_or_else(|| invalid(format!("unknown piece letter {c:?}")))?;
                    if x >= 8 {
                        return Err(invalid(format!("row {} is longer than 8 squares", y + 1)));
                    }
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = Square::at(x, y as u8);
                    board.place(Piece::new(kind, color, square));
                    x += 1;
                }
                if x > 8 {
                    return Err(invalid(format!("row {} is longer than 8 squares", y + 1)));
                }
            }
            if x != 8 {
                return Err(invalid(format!("row {} covers {x} squares", y + 1)));
            }
        }
        Ok(board)
    }

    /// Renders the board back into placement-string form.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for y in 0..8u8 {
            if y > 0 {
                out.push('/');
            }
            let mut run = 0;
            for x in 0..8u8 {
                match self.get(Square::at(x, y)) {
                    Some(piece) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.pieces.contains_key(&square)
    }

    /// Colour of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|p| p.color)
    }

    /// Stores `piece` (or clears the slot) at `square`, returning the previous occupant.
    /// A stored piece has its `square` rewritten to match the slot.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        match piece {
            Some(mut piece) => {
                piece.square = square;
                self.pieces.insert(square, piece)
            }
            None => self.pieces.remove(&square),
        }
    }

    /// Stores `piece` on its own square.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.set(piece.square, Some(piece))
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    /// Vacates `from` and occupies `to` with the piece that stood there. Whatever
    /// stood on `to` is discarded and returned.
    ///
    /// # Panics
    /// Panics if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self
            .remove(from)
            .unwrap_or_else(|| panic!("no piece on {from} to move"));
        self.set(to, Some(piece))
    }

    /// A copy of this board with `square` cleared.
    pub fn without(&self, square: Square) -> Board {
        let mut board = self.clone();
        board.remove(square);
        board
    }

    /// All pieces, row by row from the top-left corner.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Square of the `color` king, found by scanning the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color).find(|p| p.is_king()).map(|p| p.square)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8u8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8u8 {
                let c = self.get(Square::at(x, y)).map_or('.', |p| p.letter());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
