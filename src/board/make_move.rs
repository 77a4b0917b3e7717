//! The trusted move executor.
//!
//! Nothing here checks legality. Callers gate every move behind
//! [`Position::is_move`] or replay a history that was verified when it was played.

use super::state::Snapshot;
use super::{Board, CastleSide, Color, MoveRecord, Piece, Position, Square};

impl Board {
    /// Move whatever stands on `from` to `to`, landing as `piece`.
    ///
    /// Handles the two compound moves: a pawn stepping diagonally onto an
    /// empty square removes the pawn it passed (en passant), and a king moving
    /// two files from its home square brings the rook across (castling).
    pub fn execute(&mut self, from: Square, to: Square, piece: (Color, Piece)) {
        match self.piece_at(from) {
            Some((mover, Piece::King)) => {
                self.clear(from);
                self.set_piece(to, piece.0, piece.1);
                if let Some(side) = CastleSide::from_king_move(mover, from, to) {
                    self.clear(side.rook_home(mover));
                    if let Some(rook_to) = to.offset(0, -side.direction()) {
                        self.set_piece(rook_to, mover, Piece::Rook);
                    }
                }
            }
            moving => {
                if let Some((_, Piece::Pawn)) = moving {
                    if self.is_empty(to) && from.file() != to.file() {
                        // the captured pawn sits one rank behind `to` from the mover's side
                        if let Some(captured) = to.offset(-piece.0.pawn_direction(), 0) {
                            self.clear(captured);
                        }
                    }
                }
                self.clear(from);
                self.set_piece(to, piece.0, piece.1);
            }
        }
    }
}

impl Snapshot {
    /// Play `from`-`to` for the side to move and hand the move to the opponent.
    pub(crate) fn apply(&mut self, from: Square, to: Square, piece: Piece) {
        let mover = self.side_to_move;
        self.castling.record_move(mover, from, piece);
        self.board.execute(from, to, (mover, piece));
        self.side_to_move = mover.opponent();
    }
}

impl Position {
    /// Apply a move without validating it.
    ///
    /// `piece` is the piece that lands on `to` (the promotion choice when a
    /// pawn reaches the last rank), colored as the side to move. The move is
    /// appended to the history, castling flags are updated and the turn passes.
    /// Supplying an illegal move silently corrupts the game.
    pub fn move_piece(&mut self, from: Square, to: Square, piece: Piece) {
        let mover = self.current.side_to_move;
        self.history.push(MoveRecord::new(mover, piece, from, to));
        self.current.apply(from, to, piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_plain_move_overwrites_target() {
        let mut board = Board::starting();
        board.execute(sq("d1"), sq("d7"), (Color::White, Piece::Queen));
        assert!(board.is_empty(sq("d1")));
        assert_eq!(board.piece_at(sq("d7")), Some((Color::White, Piece::Queen)));
    }

    #[test]
    fn test_kingside_castle_moves_rook() {
        let mut board = Board::starting();
        board.clear(sq("f1"));
        board.clear(sq("g1"));
        board.execute(sq("e1"), sq("g1"), (Color::White, Piece::King));
        assert_eq!(board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert!(board.is_empty(sq("h1")));
        assert!(board.is_empty(sq("e1")));
    }

    #[test]
    fn test_queenside_castle_moves_rook() {
        let mut board = Board::starting();
        for s in ["b8", "c8", "d8"] {
            board.clear(sq(s));
        }
        board.execute(sq("e8"), sq("c8"), (Color::Black, Piece::King));
        assert_eq!(board.piece_at(sq("c8")), Some((Color::Black, Piece::King)));
        assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
        assert!(board.is_empty(sq("a8")));
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let mut board = Board::starting();
        board.execute(sq("e2"), sq("e5"), (Color::White, Piece::Pawn));
        board.execute(sq("d7"), sq("d5"), (Color::Black, Piece::Pawn));
        board.execute(sq("e5"), sq("d6"), (Color::White, Piece::Pawn));
        assert!(board.is_empty(sq("d5")));
        assert_eq!(board.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    }

    #[test]
    fn test_promotion_lands_new_piece() {
        let mut board = Board::empty();
        board.set_piece(sq("b7"), Color::White, Piece::Pawn);
        board.execute(sq("b7"), sq("b8"), (Color::White, Piece::Knight));
        assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_move_piece_records_and_flips_side() {
        let mut position = Position::new();
        position.move_piece(sq("g1"), sq("f3"), Piece::Knight);
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(
            position.last_move(),
            Some(&MoveRecord::new(Color::White, Piece::Knight, sq("g1"), sq("f3")))
        );
        position.move_piece(sq("h8"), sq("h6"), Piece::Rook);
        assert!(position
            .castling_rights()
            .rook_moved(Color::Black, CastleSide::KingSide));
    }
}
