//! Move history records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{piece_code, piece_from_code, Color, Piece};
use super::square::Square;
use crate::board::error::RecordError;

/// One applied half-move.
///
/// `piece` is the piece that lands on `to`, so a promotion records the new
/// piece rather than the pawn. Records are immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    color: Color,
    piece: Piece,
    from: Square,
    to: Square,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        MoveRecord {
            color,
            piece,
            from,
            to,
        }
    }

    /// The landed piece with its color
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> (Color, Piece) {
        (self.color, self.piece)
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Integer triple `[piece, from, to]` as stored by the move table and
    /// exchanged with the remote peer.
    #[must_use]
    pub fn to_codes(&self) -> [i32; 3] {
        [
            piece_code(self.color, self.piece),
            self.from.index() as i32,
            self.to.index() as i32,
        ]
    }

    /// Decode the integer triple produced by [`MoveRecord::to_codes`].
    pub fn from_codes(piece: i32, from: i32, to: i32) -> Result<Self, RecordError> {
        let (color, piece) =
            piece_from_code(piece).ok_or(RecordError::InvalidPiece { code: piece })?;
        let from = decode_square(from)?;
        let to = decode_square(to)?;
        Ok(MoveRecord::new(color, piece, from, to))
    }
}

fn decode_square(index: i32) -> Result<Square, RecordError> {
    usize::try_from(index)
        .ok()
        .and_then(Square::new)
        .ok_or(RecordError::InvalidSquare { index })
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.piece.to_fen_char(self.color),
            self.from,
            self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_of_black_queen_move() {
        let record = MoveRecord::new(
            Color::Black,
            Piece::Queen,
            "d8".parse().unwrap(),
            "h4".parse().unwrap(),
        );
        assert_eq!(record.to_codes(), [6, 59, 31]);
        assert_eq!(MoveRecord::from_codes(6, 59, 31), Ok(record));
        assert_eq!(record.to_string(), "qd8-h4");
    }

    #[test]
    fn test_from_codes_rejects_bad_values() {
        assert_eq!(
            MoveRecord::from_codes(-1, 12, 28),
            Err(RecordError::InvalidPiece { code: -1 })
        );
        assert_eq!(
            MoveRecord::from_codes(4, 12, 64),
            Err(RecordError::InvalidSquare { index: 64 })
        );
        assert_eq!(
            MoveRecord::from_codes(4, -3, 20),
            Err(RecordError::InvalidSquare { index: -3 })
        );
    }
}
