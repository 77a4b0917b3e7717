//! Chess rules engine for a single two-player game.
//!
//! A [`Position`] validates candidate moves, executes trusted moves and reports
//! check, checkmate, stalemate and draw conditions. Rendering, persistence and
//! networking belong to the caller; the engine only consumes and produces
//! [`MoveRecord`] histories.

/// Forwards to `log::debug!` when the `logging` feature is enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

pub mod board;
pub mod shared;
pub mod zobrist;

pub use board::{
    Board, CastleSide, CastlingRights, Color, DrawReason, DrawStatus, GameStatus, MoveError,
    MoveRecord, Piece, Position, PositionBuilder, PositionError, RecordError, Square,
    SquareError,
};
pub use shared::SharedPosition;
