//! Square type and board geometry constants.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width of the board in squares.
pub const BOARD_SIZE: usize = 8;

/// Total number of squares.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the chess board, stored as its index 0-63 (a1=0, b1=1, ..., h8=63).
///
/// Rank 0 is White's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct Square(u8);

impl Square {
    /// Create a square from its index, returning `None` outside 0-63
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from (rank, file) with bounds checking
    #[must_use]
    pub const fn from_coords(rank: usize, file: usize) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Square((rank * BOARD_SIZE + file) as u8))
        } else {
            None
        }
    }

    /// Square at (rank, file) for coordinates known to be on the board
    #[inline]
    #[must_use]
    pub(crate) const fn at(rank: usize, file: usize) -> Self {
        debug_assert!(rank < BOARD_SIZE && file < BOARD_SIZE);
        Square((rank * BOARD_SIZE + file) as u8)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// The square `rank_delta` ranks and `file_delta` files away, if it is on the board
    #[inline]
    #[must_use]
    pub fn offset(self, rank_delta: isize, file_delta: isize) -> Option<Square> {
        let rank = self.rank().checked_add_signed(rank_delta)?;
        let file = self.file().checked_add_signed(file_delta)?;
        Square::from_coords(rank, file)
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfRange { index })
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> usize {
        square.index()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };
        Square::from_coords(rank, file).ok_or_else(invalid)
    }
}
