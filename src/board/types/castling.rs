//! Castling bookkeeping.
//!
//! Castling eligibility is tracked as "has moved" flags for the king and both
//! rooks of each color. Flags are monotonic: once set they are never cleared,
//! even when the rook in question is later captured on its home square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::{Square, BOARD_SIZE};

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_KING_ROOK_MOVED: u8 = 1 << 1;
const WHITE_QUEEN_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_KING_ROOK_MOVED: u8 = 1 << 4;
const BLACK_QUEEN_ROOK_MOVED: u8 = 1 << 5;

const ALL_MOVED: u8 = WHITE_KING_MOVED
    | WHITE_KING_ROOK_MOVED
    | WHITE_QUEEN_ROOK_MOVED
    | BLACK_KING_MOVED
    | BLACK_KING_ROOK_MOVED
    | BLACK_QUEEN_ROOK_MOVED;

/// File of the king's home square.
pub(crate) const KING_FILE: usize = 4;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Classify a king displacement from its home square. Only a two-file step
    /// along the back rank is a castling move.
    #[must_use]
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        let back_rank = color.back_rank();
        if from.rank() != back_rank || from.file() != KING_FILE || to.rank() != back_rank {
            return None;
        }
        match to.file() as isize - from.file() as isize {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// File step from king towards the castling rook
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Home square of the rook on this side
    #[must_use]
    pub fn rook_home(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => BOARD_SIZE - 1,
            CastleSide::QueenSide => 0,
        };
        home_square(color, file)
    }

    /// Number of squares strictly between the king and this rook
    #[inline]
    #[must_use]
    pub const fn gap(self) -> usize {
        match self {
            CastleSide::KingSide => 2,
            CastleSide::QueenSide => 3,
        }
    }
}

/// Home square of the king of `color`.
#[must_use]
pub fn king_home(color: Color) -> Square {
    home_square(color, KING_FILE)
}

fn home_square(color: Color, file: usize) -> Square {
    Square::at(color.back_rank(), file)
}

/// Per-color "king moved", "king rook moved" and "queen rook moved" flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved yet: both sides may still castle on both wings
    #[must_use]
    pub const fn unmoved() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook counts as moved: castling is no longer possible
    #[must_use]
    pub const fn all_moved() -> Self {
        CastlingRights(ALL_MOVED)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & rook_bit(color, side) != 0
    }

    /// True while neither the king nor the rook of `side` has moved
    #[inline]
    #[must_use]
    pub const fn may_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= rook_bit(color, side);
    }

    /// Update the flags for a move by `mover` from `from` landing `piece`.
    ///
    /// Any king move of the mover sets its king flag; a move starting on one of
    /// the mover's rook corners sets that rook's flag.
    pub fn record_move(&mut self, mover: Color, from: Square, piece: Piece) {
        if piece == Piece::King {
            self.mark_king_moved(mover);
        }
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if from == side.rook_home(mover) {
                self.mark_rook_moved(mover, side);
            }
        }
    }

    /// Raw bitmask (for hashing)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from a raw bitmask; bits above the six flags are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_MOVED)
    }
}

const fn king_bit(color: Color) -> u8 {
    match color {
        Color::White => WHITE_KING_MOVED,
        Color::Black => BLACK_KING_MOVED,
    }
}

const fn rook_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => WHITE_KING_ROOK_MOVED,
        (Color::White, CastleSide::QueenSide) => WHITE_QUEEN_ROOK_MOVED,
        (Color::Black, CastleSide::KingSide) => BLACK_KING_ROOK_MOVED,
        (Color::Black, CastleSide::QueenSide) => BLACK_QUEEN_ROOK_MOVED,
    }
}
