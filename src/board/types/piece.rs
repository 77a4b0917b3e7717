//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of piece kinds per color.
pub const PIECE_KINDS: usize = 6;

/// Integer code used for an empty square by collaborators that store pieces as numbers.
pub const NO_PIECE: i32 = -1;

/// Chess piece kinds.
///
/// Variant order matches the promotion menu (queen first) and the integer
/// piece codes exchanged with storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
    King,
}

impl Piece {
    /// All piece kinds in code order
    pub const ALL: [Piece; PIECE_KINDS] = [
        Piece::Queen,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Pawn,
        Piece::King,
    ];

    /// Pieces a pawn may promote to
    pub const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Knight, Piece::Bishop];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Piece::Queen => 0,
            Piece::Rook => 1,
            Piece::Knight => 2,
            Piece::Bishop => 3,
            Piece::Pawn => 4,
            Piece::King => 5,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Piece> {
        match index {
            0 => Some(Piece::Queen),
            1 => Some(Piece::Rook),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Pawn),
            5 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a character (case-insensitive: q, r, n, b, p, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'q' => Some(Piece::Queen),
            'r' => Some(Piece::Rook),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'p' => Some(Piece::Pawn),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Pawn => 'p',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Returns true if this piece slides along ranks and files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }

    /// Returns true if this piece slides along diagonals (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Color> {
        match index {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Integer code of a colored piece: `color * 6 + kind`.
#[inline]
#[must_use]
pub const fn piece_code(color: Color, piece: Piece) -> i32 {
    (color.index() * PIECE_KINDS + piece.index()) as i32
}

/// Inverse of [`piece_code`]. [`NO_PIECE`] and any other out-of-range value yield `None`.
#[must_use]
pub fn piece_from_code(code: i32) -> Option<(Color, Piece)> {
    let code = usize::try_from(code).ok()?;
    let color = Color::from_index(code / PIECE_KINDS)?;
    let piece = Piece::from_index(code % PIECE_KINDS)?;
    Some((color, piece))
}
