//! Crate root module declarations for the Plum chess piece vocabulary.
//!
//! Exposes the piece value types (color, piece type, piece), the
//! single-character and Unicode codecs, and the shared error type so board,
//! move-generation and evaluation code can import stable module paths.

pub mod chess_errors;

pub mod pieces {
    pub mod color;
    pub mod piece;
    pub mod piece_type;
}

pub mod utils {
    pub mod piece_codec;
    pub mod render_pieces;
}

pub use chess_errors::ChessErrors;
pub use pieces::{color::Color, piece::Piece, piece_type::PieceType};
