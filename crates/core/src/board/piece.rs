use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

use super::square::{Offset, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Piece letter as used in placement strings, lowercase.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Unit directions for sliding pieces; empty for everything else.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Offset] {
        match self {
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Queen => &QUEEN_DIRS,
            _ => &[],
        }
    }

    pub fn is_slider(self) -> bool {
        !self.slide_dirs().is_empty()
    }
}

pub const ROOK_DIRS: [Offset; 4] = [
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(0, -1),
];

pub const BISHOP_DIRS: [Offset; 4] = [
    Offset::new(-1, 1),
    Offset::new(1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
];

pub const QUEEN_DIRS: [Offset; 8] = [
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(1, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, -1),
    Offset::new(0, -1),
    Offset::new(1, -1),
];

pub const KING_STEPS: [Offset; 8] = QUEEN_DIRS;

pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(-2, 1),
    Offset::new(-1, 2),
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
];

const WHITE_PAWN_CAPTURES: [Offset; 2] = [Offset::new(-1, -1), Offset::new(1, -1)];
const BLACK_PAWN_CAPTURES: [Offset; 2] = [Offset::new(1, 1), Offset::new(-1, 1)];

/// A piece standing on the board. Its `square` always equals the board slot holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    /// Placement-string letter: uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Forward direction for pawns of this colour.
    pub fn pawn_forward(&self) -> Offset {
        match self.color {
            Color::White => Offset::new(0, -1),
            Color::Black => Offset::new(0, 1),
        }
    }

    /// Rank a pawn of this colour starts on.
    pub fn pawn_home_rank(&self) -> i8 {
        match self.color {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn pawn_capture_offsets(&self) -> &'static [Offset] {
        match self.color {
            Color::White => &WHITE_PAWN_CAPTURES,
            Color::Black => &BLACK_PAWN_CAPTURES,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind.name(), self.square)
    }
}
