//! Side (color) of a chess piece.
//!
//! "No color" is expressed as `Option<Color>::None` rather than a third
//! variant, so every operation on `Color` is total.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{single_char, ChessErrors};

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The light side. Its pieces serialize as lower-case letters.
    White,
    /// The dark side. Its pieces serialize as upper-case letters.
    Black,
}

impl Color {
    /// Both colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Canonical lower-case color code: `'w'` or `'b'`.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Color {
    type Error = ChessErrors;

    /// Case-insensitive: `w` is White, `b` is Black.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'w' | 'W' => Ok(Color::White),
            'b' | 'B' => Ok(Color::Black),
            _ => Err(ChessErrors::InvalidColor(ch)),
        }
    }
}

impl FromStr for Color {
    type Err = ChessErrors;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Color::try_from(single_char(token)?)
    }
}
