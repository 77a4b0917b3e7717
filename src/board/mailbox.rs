//! Flat 64-cell board ("mailbox") representation.
//!
//! Each cell holds the colored piece standing on it or `None`. Attack and
//! path tests walk the array square by square; there are no bitboards.

use std::ops::Index;

use super::{Color, Piece, Square, SQUARE_COUNT};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 64 squares of a chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<(Color, Piece)>; SQUARE_COUNT],
}

impl Board {
    /// A board with no pieces at all
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [None; SQUARE_COUNT],
        }
    }

    /// The standard starting array
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square::at(0, file), Color::White, *piece);
            board.set_piece(Square::at(7, file), Color::Black, *piece);
            board.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.index()]
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Square of the king of `color`, scanning from a1
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// All occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Number of pieces of the given color and kind
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some((color, piece)))
            .count()
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a rank, file or diagonal; otherwise the walk
    /// never reaches `to` and the answer is `false`.
    pub(crate) fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let rank_step = (to.rank() as isize - from.rank() as isize).signum();
        let file_step = (to.file() as isize - from.file() as isize).signum();
        let mut next = from.offset(rank_step, file_step);
        while let Some(sq) = next {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            next = sq.offset(rank_step, file_step);
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl Index<Square> for Board {
    type Output = Option<(Color, Piece)>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_array() {
        let board = Board::starting();
        assert_eq!(board.piece_at(sq("e1")), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Queen)));
        assert_eq!(board[sq("b7")], Some((Color::Black, Piece::Pawn)));
        assert!(board.is_empty(sq("e4")));
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(Color::White, Piece::Pawn), 8);
    }

    #[test]
    fn test_king_square() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_path_clear_on_lines() {
        let board = Board::starting();
        assert!(board.is_path_clear(sq("a2"), sq("a7")));
        assert!(!board.is_path_clear(sq("a1"), sq("a3")));
        assert!(board.is_path_clear(sq("c1"), sq("d2")));
        assert!(!board.is_path_clear(sq("c1"), sq("e3")));
        assert!(board.is_path_clear(sq("a3"), sq("h3")));
    }

    #[test]
    fn test_path_clear_off_line_is_false() {
        let board = Board::empty();
        assert!(!board.is_path_clear(sq("a1"), sq("b3")));
    }
}
