//! Board coordinates.
//!
//! The origin is the top-left corner seen from White: `x` runs over files a..h,
//! `y` runs from rank 8 (`y = 0`) down to rank 1 (`y = 7`). White pawns therefore
//! move towards decreasing `y`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const BOARD_SIZE: i8 = 8;

/// A square on the 8x8 board. Both coordinates are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    // Ordered y-first so that iteration walks the board row by row.
    y: u8,
    x: u8,
}

/// A step between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i8,
    pub dy: i8,
}

impl Offset {
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn scaled(self, factor: i8) -> Offset {
        Offset::new(self.dx * factor, self.dy * factor)
    }
}

impl Square {
    /// Builds a square from coordinates, or `None` when they fall off the board.
    #[inline]
    pub fn new(x: i8, y: i8) -> Option<Square> {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Builds a square from coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if either coordinate is 8 or larger.
    pub const fn at(x: u8, y: u8) -> Square {
        assert!(x < 8 && y < 8, "square coordinates out of range");
        Square { y, x }
    }

    #[inline]
    pub fn x(self) -> i8 {
        self.x as i8
    }

    #[inline]
    pub fn y(self) -> i8 {
        self.y as i8
    }

    /// The square reached by applying `offset`, clipped to the board.
    #[inline]
    pub fn offset(self, offset: Offset) -> Option<Square> {
        Square::new(self.x() + offset.dx, self.y() + offset.dy)
    }

    /// Unit step (sign of each coordinate delta) pointing from `self` towards `target`.
    pub fn step_towards(self, target: Square) -> Offset {
        Offset::new(
            (target.x() - self.x()).signum(),
            (target.y() - self.y()).signum(),
        )
    }

    /// All 64 squares, row by row from the top-left corner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|y| (0..8u8).map(move |x| Square { y, x }))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.x) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.y) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare(s.to_string());
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::at(file - b'a', b'8' - rank))
    }
}

impl TryFrom<String> for Square {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
