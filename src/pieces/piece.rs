//! A colored piece, or the empty square sentinel.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{single_char, ChessErrors};
use crate::pieces::{color::Color, piece_type::PieceType};

/// Reserved output for "no color", "no type" and the empty piece. Never
/// accepted as input.
pub const INVALID_CHAR: char = '?';

/// A chess piece, or [`Piece::Empty`] for an unoccupied square.
///
/// Both halves are present or both are absent; a piece with a color but no
/// type (or the reverse) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied { color: Color, kind: PieceType },
}

impl Piece {
    /// The twelve real pieces, White then Black, each Pawn through King.
    pub const ALL: [Piece; 12] = {
        let mut all = [Piece::Empty; 12];
        let mut i = 0;
        while i < 12 {
            let color = if i < PieceType::COUNT {
                Color::White
            } else {
                Color::Black
            };
            all[i] = Piece::new(color, PieceType::ALL[i % PieceType::COUNT]);
            i += 1;
        }
        all
    };

    #[inline]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece::Occupied { color, kind }
    }

    /// Build a piece from optional halves, as held by code that tracks color
    /// and type separately. Both absent yields [`Piece::Empty`].
    pub fn from_parts(
        color: Option<Color>,
        kind: Option<PieceType>,
    ) -> Result<Self, ChessErrors> {
        match (color, kind) {
            (Some(color), Some(kind)) => Ok(Piece::new(color, kind)),
            (None, None) => Ok(Piece::Empty),
            (color, kind) => Err(ChessErrors::InvalidPieceConstruction { color, kind }),
        }
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Piece::Occupied { .. })
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Occupied { color, .. } => Some(color),
            Piece::Empty => None,
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceType> {
        match self {
            Piece::Occupied { kind, .. } => Some(kind),
            Piece::Empty => None,
        }
    }

    #[inline]
    pub const fn material_value(self) -> Option<i32> {
        match self {
            Piece::Occupied { kind, .. } => Some(kind.material_value()),
            Piece::Empty => None,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        match self {
            Piece::Occupied { kind, .. } => kind.is_slider(),
            Piece::Empty => false,
        }
    }

    /// Piece letter: upper case for Black, lower case for White, `'?'` when
    /// empty.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Occupied { color, kind } => kind.to_char(matches!(color, Color::Black)),
            Piece::Empty => INVALID_CHAR,
        }
    }

    /// Standard Unicode chess glyph; `'?'` when empty.
    #[inline]
    pub const fn to_unicode(self) -> char {
        let (color, kind) = match self {
            Piece::Occupied { color, kind } => (color, kind),
            Piece::Empty => return INVALID_CHAR,
        };

        match (color, kind) {
            (Color::White, PieceType::Pawn) => '♙',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::King) => '♔',
            (Color::Black, PieceType::Pawn) => '♟',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Piece {
    type Error = ChessErrors;

    /// Upper case is Black, anything else is White; the lower-cased letter
    /// must be a piece-type letter.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let color = if ch.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };

        let kind = PieceType::try_from(ch.to_ascii_lowercase())
            .map_err(|_| ChessErrors::InvalidPiece(ch))?;

        Ok(Piece::new(color, kind))
    }
}

impl FromStr for Piece {
    type Err = ChessErrors;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Piece::try_from(single_char(token)?)
    }
}
