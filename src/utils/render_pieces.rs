//! Terminal-oriented rendering of piece sequences.
//!
//! Turns a row of pieces (for example one board rank) into a compact,
//! space-separated string for debugging and diagnostics.

use crate::pieces::piece::Piece;

/// Glyph printed for an empty square.
pub const EMPTY_SQUARE: char = '·';

/// Render pieces separated by single spaces, using Unicode glyphs or piece
/// letters. Empty squares print as [`EMPTY_SQUARE`].
pub fn render_pieces(pieces: &[Piece], unicode: bool) -> String {
    let mut out = String::with_capacity(pieces.len() * 4);

    for (idx, piece) in pieces.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }

        let glyph = match piece {
            Piece::Empty => EMPTY_SQUARE,
            piece if unicode => piece.to_unicode(),
            piece => piece.to_char(),
        };
        out.push(glyph);
    }

    out
}
