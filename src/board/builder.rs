//! Fluent builder for custom starting positions.
//!
//! A built position records its layout as the initial state, so every replay
//! (draw detection included) starts from it instead of the standard array.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Piece, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(position.legal_move_exists());
//! ```

use super::error::PositionError;
use super::state::Snapshot;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for [`Position`] setups.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move.
    ///
    /// Castling flags start as "everything moved": a custom layout has no
    /// reason to contain rooks on their home squares.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::all_moved(),
        }
    }

    /// The standard starting array with every castling right intact.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::unmoved(),
        }
    }

    /// Place a piece, replacing whatever stood there
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the initial "has moved" flags
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Build the position, checking there is exactly one king per color.
    pub fn build(self) -> Result<Position, PositionError> {
        for color in Color::BOTH {
            match self.board.count(color, Piece::King) {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::DuplicateKing { color }),
            }
        }
        Ok(Position::from_snapshot(Snapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        let standard = Position::new();
        assert_eq!(built.board(), standard.board());
        assert_eq!(built.hash(), standard.hash());
    }

    #[test]
    fn test_missing_and_duplicate_kings() {
        assert_eq!(
            PositionBuilder::new()
                .piece(sq("e1"), Color::White, Piece::King)
                .build()
                .unwrap_err(),
            PositionError::MissingKing {
                color: Color::Black
            }
        );
        assert_eq!(
            PositionBuilder::starting_position()
                .piece(sq("d4"), Color::White, Piece::King)
                .build()
                .unwrap_err(),
            PositionError::DuplicateKing {
                color: Color::White
            }
        );
    }

    #[test]
    fn test_side_to_move() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        assert!(!position.white_to_move());
        assert_eq!(position.castling_rights(), CastlingRights::all_moved());
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert!(position.piece_at(sq("a1")).is_none());
        assert!(position.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_replay_starts_from_built_layout() {
        let mut position = PositionBuilder::new()
            .piece(sq("a1"), Color::White, Piece::King)
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("d4"), Color::White, Piece::Knight)
            .build()
            .unwrap();
        for (from, to, piece) in [
            ("d4", "f5", Piece::Knight),
            ("h8", "g8", Piece::King),
            ("f5", "d4", Piece::Knight),
            ("g8", "h8", Piece::King),
        ] {
            position.move_piece(sq(from), sq(to), piece);
        }
        let mut replay = position.replay();
        assert_eq!(replay.by_ref().count(), 4);
        assert_eq!(*replay.state(), position.current);
        assert!(position.checkmate_impossible());
    }
}
