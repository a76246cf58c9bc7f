//! Single-character codecs for colors, piece types and pieces.
//!
//! Free-function form of the conversions on the piece types, including
//! `Option`-aware serializers for code that tracks "no color" or "no type".
//! Parsing is strict and reports the offending character. Serialization is
//! total: absent or empty values render as [`INVALID_CHAR`].
//!
//! Piece letters encode color by case, upper case for Black and lower case
//! for White, so `'Q'` is a black queen and `'n'` a white knight.

use crate::chess_errors::ChessErrors;
use crate::pieces::{color::Color, piece::Piece, piece_type::PieceType};

pub use crate::pieces::piece::INVALID_CHAR;

/// Parse a color code, case-insensitive: `w` is White, `b` is Black.
#[inline]
pub fn parse_color(ch: char) -> Result<Color, ChessErrors> {
    Color::try_from(ch)
}

#[inline]
pub const fn color_to_char(color: Option<Color>) -> char {
    match color {
        Some(color) => color.to_char(),
        None => INVALID_CHAR,
    }
}

/// Parse a piece-type letter (`p n b r q k`), case-insensitive.
#[inline]
pub fn parse_piece_type(ch: char) -> Result<PieceType, ChessErrors> {
    PieceType::try_from(ch)
}

/// Piece-type letter in the requested case. `None` is always `'?'`.
#[inline]
pub const fn piece_type_to_char(kind: Option<PieceType>, uppercase: bool) -> char {
    match kind {
        Some(kind) => kind.to_char(uppercase),
        None => INVALID_CHAR,
    }
}

#[inline]
pub fn parse_piece(ch: char) -> Result<Piece, ChessErrors> {
    Piece::try_from(ch)
}

#[inline]
pub const fn piece_to_char(piece: Piece) -> char {
    piece.to_char()
}

#[inline]
pub const fn piece_to_unicode(piece: Piece) -> char {
    piece.to_unicode()
}
