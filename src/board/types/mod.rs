//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds, colors and their integer codes
//! - `Square` - board square as an index 0-63
//! - `CastlingRights` / `CastleSide` - monotonic castling flags
//! - `MoveRecord` - one entry of the move history

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, CastleSide, CastlingRights};
pub use moves::MoveRecord;
pub use piece::{piece_code, piece_from_code, Color, Piece, NO_PIECE, PIECE_KINDS};
pub use square::{Square, BOARD_SIZE, SQUARE_COUNT};
