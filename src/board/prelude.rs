//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(), GameStatus::InProgress);
//! ```

pub use super::{
    CastlingRights, Color, DrawStatus, GameStatus, MoveError, MoveRecord, Piece, Position,
    PositionBuilder, Square,
};
