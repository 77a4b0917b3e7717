//! Attack and check detection by ray scanning.

use super::{Board, Color, Piece, Position, Square};

pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Board {
    /// First occupied square walking from `from` (exclusive) in one direction
    fn first_occupied(&self, from: Square, direction: (isize, isize)) -> Option<(Color, Piece)> {
        let mut next = from.offset(direction.0, direction.1);
        while let Some(sq) = next {
            if let Some(found) = self.piece_at(sq) {
                return Some(found);
            }
            next = sq.offset(direction.0, direction.1);
        }
        None
    }

    fn has_piece_at_offsets(
        &self,
        sq: Square,
        offsets: &[(isize, isize)],
        wanted: (Color, Piece),
    ) -> bool {
        offsets
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .any(|target| self.piece_at(target) == Some(wanted))
    }

    /// True if any piece of `attacker` attacks `sq`.
    #[must_use]
    pub fn is_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        for direction in STRAIGHT_DIRECTIONS {
            if let Some((color, piece)) = self.first_occupied(sq, direction) {
                if color == attacker && piece.attacks_straight() {
                    return true;
                }
            }
        }
        for direction in DIAGONAL_DIRECTIONS {
            if let Some((color, piece)) = self.first_occupied(sq, direction) {
                if color == attacker && piece.attacks_diagonally() {
                    return true;
                }
            }
        }

        if self.has_piece_at_offsets(sq, &KNIGHT_OFFSETS, (attacker, Piece::Knight)) {
            return true;
        }
        if self.has_piece_at_offsets(sq, &KING_OFFSETS, (attacker, Piece::King)) {
            return true;
        }

        // an attacking pawn stands one rank "behind" sq from its own point of view
        let rank_step = -attacker.pawn_direction();
        self.has_piece_at_offsets(
            sq,
            &[(rank_step, -1), (rank_step, 1)],
            (attacker, Piece::Pawn),
        )
    }

    /// True if the king of `color` is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked_by(king, color.opponent()),
            None => false,
        }
    }
}

impl Position {
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.current.board.is_in_check(color)
    }

    /// Would `color` be in check after `from`-`to` landing `piece`?
    ///
    /// The move is played on a scratch copy of the board; the live position is
    /// never touched. The landed piece takes the color of whatever stands on
    /// `from` (the side to move for an empty square).
    #[must_use]
    pub fn is_in_check_after_move(&self, color: Color, from: Square, to: Square, piece: Piece) -> bool {
        let landed = self
            .current
            .board
            .color_at(from)
            .unwrap_or(self.current.side_to_move);
        let mut scratch = self.current.board;
        scratch.execute(from, to, (landed, piece));
        scratch.is_in_check(color)
    }
}
