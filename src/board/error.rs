//! Error types for the fallible board operations.
//!
//! Legality queries never fail: they answer `false`. These errors belong to the
//! constructors and checked wrappers that sit around the trusted core.

use std::fmt;

use super::{Color, MoveRecord, Piece, Square};

/// Error type for square conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0-63
    IndexOutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding stored move records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Piece code is not `color * 6 + kind`
    InvalidPiece { code: i32 },
    /// Square index outside 0-63
    InvalidSquare { index: i32 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidPiece { code } => write!(f, "Invalid piece code {code}"),
            RecordError::InvalidSquare { index } => {
                write!(f, "Invalid square index {index} in move record")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Error type for checked moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move breaks the rules in the current position
    Illegal { from: Square, to: Square },
    /// A pawn reaches the last rank and no promotion piece was given
    PromotionRequired { to: Square },
    /// The promotion piece is not allowed, or the move does not promote
    InvalidPromotion { piece: Piece },
    /// The game was resigned or agreed drawn
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}-{to}"),
            MoveError::PromotionRequired { to } => {
                write!(f, "Pawn reaching {to} must choose a promotion piece")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Invalid promotion to '{}'", piece.to_char())
            }
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for building or reconstructing a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The layout has no king of this color
    MissingKing { color: Color },
    /// The layout has more than one king of this color
    DuplicateKing { color: Color },
    /// A history entry is not legal where it was played
    IllegalHistoryMove { ply: usize, record: MoveRecord },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
            PositionError::IllegalHistoryMove { ply, record } => {
                write!(f, "Illegal move {record} at ply {ply}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_messages() {
        let err = SquareError::IndexOutOfRange { index: 64 };
        assert!(err.to_string().contains("64"));
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("'z9'"));
    }

    #[test]
    fn test_record_error_messages() {
        assert!(RecordError::InvalidPiece { code: 12 }
            .to_string()
            .contains("12"));
        assert!(RecordError::InvalidSquare { index: -1 }
            .to_string()
            .contains("-1"));
    }

    #[test]
    fn test_move_error_messages() {
        let e2: Square = "e2".parse().unwrap();
        let e5: Square = "e5".parse().unwrap();
        let err = MoveError::Illegal { from: e2, to: e5 };
        assert!(err.to_string().contains("e2-e5"));
        let err = MoveError::InvalidPromotion { piece: Piece::King };
        assert!(err.to_string().contains("'k'"));
    }

    #[test]
    fn test_position_error_messages() {
        let err = PositionError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
        let record = MoveRecord::new(
            Color::White,
            Piece::Pawn,
            "e2".parse().unwrap(),
            "e5".parse().unwrap(),
        );
        let err = PositionError::IllegalHistoryMove { ply: 3, record };
        assert!(err.to_string().contains("Pe2-e5"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::PromotionRequired {
            to: "a8".parse().unwrap(),
        };
        assert_eq!(err.clone(), err);
    }
}
