//! Errors used throughout the piece vocabulary.
//!
//! `ChessErrors` is the single error type returned by every fallible parse or
//! construction in this crate. Each variant carries the offending input so
//! callers can report exactly which character or token was rejected.
//!
//! Usage guidelines:
//! - Parsing functions return `Result<..., ChessErrors>`; nothing is retried or
//!   coerced internally, and no partial value is produced on failure.
//! - Serialization never fails. Empty or absent values render as the reserved
//!   `'?'` character instead of raising an error.

use crate::pieces::{color::Color, piece_type::PieceType};

/// Unified error type for piece parsing and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// A color code outside `w`, `W`, `b`, `B`.
    #[error("invalid color character '{0}'")]
    InvalidColor(char),

    /// A piece-type letter outside `p n b r q k` in either case.
    #[error("invalid piece type character '{0}'")]
    InvalidPieceType(char),

    /// A piece character whose lower-cased form is not a piece-type letter.
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    /// A string token that is not exactly one character long.
    ///
    /// Payload: the original token for diagnostics.
    #[error("expected a single character token, got '{0}'")]
    InvalidToken(String),

    /// Tried to build a piece from a color and a type where exactly one of the
    /// two halves is absent.
    #[error("cannot build a piece from color {color:?} and type {kind:?}")]
    InvalidPieceConstruction {
        color: Option<Color>,
        kind: Option<PieceType>,
    },
}

/// Extract the only character of a one-character token.
pub(crate) fn single_char(token: &str) -> Result<char, ChessErrors> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ChessErrors::InvalidToken(token.to_owned())),
    }
}
