//! Piece types, their material values, and the ordering used to rank them.
//!
//! "No type" is expressed as `Option<PieceType>::None`, which keeps
//! [`PieceType::material_value`] total.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{single_char, ChessErrors};

/// Material value reported for the king. Exceeds the non-king material both
/// sides can hold together, and leaves room to sum a whole board in `i32`.
pub const KING_VALUE: i32 = 5000;

/// The six kinds of chess piece, without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const COUNT: usize = 6;

    /// All piece types, Pawn through King.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Material weight in pawns. The king reports [`KING_VALUE`].
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => KING_VALUE,
        }
    }

    /// True for bishops and queens only. Rooks are deliberately not included.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Queen)
    }

    /// English algebraic letter in the requested case.
    #[inline]
    pub const fn to_char(self, uppercase: bool) -> char {
        let letter = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };

        if uppercase {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl Ord for PieceType {
    /// Orders by material value, except that a knight always ranks below a
    /// bishop even though both are worth 3.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PieceType::Knight, PieceType::Bishop) => Ordering::Less,
            (PieceType::Bishop, PieceType::Knight) => Ordering::Greater,
            _ => self.material_value().cmp(&other.material_value()),
        }
    }
}

impl PartialOrd for PieceType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(false))
    }
}

impl TryFrom<char> for PieceType {
    type Error = ChessErrors;

    /// Case-insensitive `p n b r q k`.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_lowercase() {
            'p' => Ok(PieceType::Pawn),
            'n' => Ok(PieceType::Knight),
            'b' => Ok(PieceType::Bishop),
            'r' => Ok(PieceType::Rook),
            'q' => Ok(PieceType::Queen),
            'k' => Ok(PieceType::King),
            _ => Err(ChessErrors::InvalidPieceType(ch)),
        }
    }
}

impl FromStr for PieceType {
    type Err = ChessErrors;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        PieceType::try_from(single_char(token)?)
    }
}
