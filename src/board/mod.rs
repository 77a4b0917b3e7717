//! Chess board representation and game rules.
//!
//! A flat 64-cell [`Board`] plus the move history that produced it make up a
//! [`Position`]. Legality, check detection and draw detection all work on the
//! array directly; derived state (side to move, castling flags, en passant) is
//! recomputed from the history rather than cached.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position, Square};
//!
//! let mut position = Position::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(position.is_move(e2, e4));
//! position.try_move(e2, e4, None).unwrap();
//! assert_eq!(position.side_to_move(), Color::Black);
//! ```

mod attacks;
mod builder;
mod display;
mod draw;
mod error;
mod legality;
mod mailbox;
mod make_move;
mod movegen;
mod play;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use draw::DrawStatus;
pub use error::{MoveError, PositionError, RecordError, SquareError};
pub use mailbox::Board;
pub use state::Position;
pub use status::{DrawReason, GameStatus};
pub use types::{
    king_home, piece_code, piece_from_code, CastleSide, CastlingRights, Color, MoveRecord, Piece,
    Square, BOARD_SIZE, NO_PIECE, PIECE_KINDS, SQUARE_COUNT,
};
