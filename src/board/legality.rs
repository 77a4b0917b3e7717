//! Move legality: per-piece geometry, castling and en passant.
//!
//! [`Position::is_move`] is the only gate in front of the trusted executor.
//! It never fails; anything malformed is simply not a move.

use super::{CastleSide, Color, Piece, Position, Square};

impl Position {
    /// Is `from`-`to` a legal move for the side to move?
    ///
    /// Checks, in order: distinct squares, a side-to-move piece on `from`, no
    /// own piece on `to`, the mover's king not left in check, and finally the
    /// geometry of the moving piece.
    #[must_use]
    pub fn is_move(&self, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        let mover = self.current.side_to_move;
        let piece = match self.current.board.piece_at(from) {
            Some((color, piece)) if color == mover => piece,
            _ => return false,
        };
        if self.current.board.color_at(to) == Some(mover) {
            return false;
        }
        if self.is_in_check_after_move(mover, from, to, piece) {
            return false;
        }

        match piece {
            Piece::Queen => self.is_straight_move(from, to) || self.is_diagonal_move(from, to),
            Piece::Rook => self.is_straight_move(from, to),
            Piece::Bishop => self.is_diagonal_move(from, to),
            Piece::Knight => is_knight_jump(from, to),
            Piece::King => is_king_step(from, to) || self.is_castling_move(mover, from, to),
            Piece::Pawn => self.is_pawn_move(mover, from, to),
        }
    }

    /// [`Position::is_move`] on raw board indices; anything outside 0-63 is
    /// not a move.
    #[must_use]
    pub fn is_move_indices(&self, from: usize, to: usize) -> bool {
        match (Square::new(from), Square::new(to)) {
            (Some(from), Some(to)) => self.is_move(from, to),
            _ => false,
        }
    }

    /// Square a pawn may capture onto en passant, if any.
    ///
    /// Only the most recent move counts: it must be a pawn double step, and the
    /// target is the square that pawn skipped over.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        let last = self.history.last()?;
        if last.piece().1 != Piece::Pawn || last.from().index().abs_diff(last.to().index()) != 16 {
            return None;
        }
        Square::new((last.from().index() + last.to().index()) / 2)
    }

    fn is_straight_move(&self, from: Square, to: Square) -> bool {
        (from.rank() == to.rank() || from.file() == to.file())
            && self.current.board.is_path_clear(from, to)
    }

    fn is_diagonal_move(&self, from: Square, to: Square) -> bool {
        from.rank().abs_diff(to.rank()) == from.file().abs_diff(to.file())
            && self.current.board.is_path_clear(from, to)
    }

    fn is_pawn_move(&self, mover: Color, from: Square, to: Square) -> bool {
        let board = &self.current.board;
        let direction = mover.pawn_direction();
        let rank_delta = to.rank() as isize - from.rank() as isize;

        if from.file() == to.file() {
            if !board.is_empty(to) {
                return false;
            }
            if rank_delta == direction {
                return true;
            }
            return from.rank() == mover.pawn_start_rank()
                && rank_delta == 2 * direction
                && from
                    .offset(direction, 0)
                    .map_or(false, |between| board.is_empty(between));
        }

        from.file().abs_diff(to.file()) == 1
            && rank_delta == direction
            && (!board.is_empty(to) || self.en_passant_target() == Some(to))
    }

    /// Castling rules on top of the king's two-file step.
    ///
    /// The destination square is covered by the general check guard in
    /// [`Position::is_move`]; only the square the king crosses is tested here.
    fn is_castling_move(&self, mover: Color, from: Square, to: Square) -> bool {
        let side = match CastleSide::from_king_move(mover, from, to) {
            Some(side) => side,
            None => return false,
        };
        let rights = self.current.castling;
        if rights.king_moved(mover) || self.is_in_check(mover) {
            return false;
        }
        let gap_is_empty = (1..=side.gap()).all(|step| {
            from.offset(0, side.direction() * step as isize)
                .map_or(false, |sq| self.current.board.is_empty(sq))
        });
        if !gap_is_empty || rights.rook_moved(mover, side) {
            return false;
        }
        match from.offset(0, side.direction()) {
            Some(crossed) => !self.is_in_check_after_move(mover, from, crossed, Piece::King),
            None => false,
        }
    }
}

fn is_knight_jump(from: Square, to: Square) -> bool {
    matches!(
        (from.rank().abs_diff(to.rank()), from.file().abs_diff(to.file())),
        (1, 2) | (2, 1)
    )
}

fn is_king_step(from: Square, to: Square) -> bool {
    from.rank().abs_diff(to.rank()) <= 1 && from.file().abs_diff(to.file()) <= 1
}
