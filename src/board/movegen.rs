//! Destination enumeration for a single piece.
//!
//! Pseudo-legal destinations follow geometry and blocking only; castling is
//! left out because it can never be the only way out of check.

use super::attacks::{DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRECTIONS};
use super::{CastleSide, Color, Piece, Position, Square};

impl Position {
    /// Geometry-only destinations of the piece on `from`, castling excluded.
    pub(crate) fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        let (color, piece) = match self.current.board.piece_at(from) {
            Some(found) => found,
            None => return targets,
        };

        match piece {
            Piece::Pawn => self.push_pawn_targets(color, from, &mut targets),
            Piece::Knight => self.push_step_targets(color, from, &KNIGHT_OFFSETS, &mut targets),
            Piece::King => self.push_step_targets(color, from, &KING_OFFSETS, &mut targets),
            Piece::Rook => self.push_slide_targets(color, from, &STRAIGHT_DIRECTIONS, &mut targets),
            Piece::Bishop => self.push_slide_targets(color, from, &DIAGONAL_DIRECTIONS, &mut targets),
            Piece::Queen => {
                self.push_slide_targets(color, from, &STRAIGHT_DIRECTIONS, &mut targets);
                self.push_slide_targets(color, from, &DIAGONAL_DIRECTIONS, &mut targets);
            }
        }
        targets
    }

    fn push_pawn_targets(&self, color: Color, from: Square, targets: &mut Vec<Square>) {
        let board = &self.current.board;
        let direction = color.pawn_direction();

        if let Some(one) = from.offset(direction, 0).filter(|&sq| board.is_empty(sq)) {
            targets.push(one);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(direction, 0).filter(|&sq| board.is_empty(sq)) {
                    targets.push(two);
                }
            }
        }

        let en_passant = self.en_passant_target();
        for file_step in [-1, 1] {
            if let Some(sq) = from.offset(direction, file_step) {
                let is_enemy = board.color_at(sq) == Some(color.opponent());
                if is_enemy || en_passant == Some(sq) {
                    targets.push(sq);
                }
            }
        }
    }

    fn push_step_targets(
        &self,
        color: Color,
        from: Square,
        offsets: &[(isize, isize)],
        targets: &mut Vec<Square>,
    ) {
        for &(dr, df) in offsets {
            if let Some(sq) = from.offset(dr, df) {
                if self.current.board.color_at(sq) != Some(color) {
                    targets.push(sq);
                }
            }
        }
    }

    fn push_slide_targets(
        &self,
        color: Color,
        from: Square,
        directions: &[(isize, isize)],
        targets: &mut Vec<Square>,
    ) {
        for &(dr, df) in directions {
            let mut next = from.offset(dr, df);
            while let Some(sq) = next {
                match self.current.board.color_at(sq) {
                    None => targets.push(sq),
                    Some(found) => {
                        if found != color {
                            targets.push(sq);
                        }
                        break;
                    }
                }
                next = sq.offset(dr, df);
            }
        }
    }

    /// Squares occupied by the side to move
    fn own_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let mover = self.current.side_to_move;
        self.current
            .board
            .pieces()
            .filter(move |&(_, color, _)| color == mover)
            .map(|(sq, _, piece)| (sq, piece))
    }

    /// Does the side to move have at least one move that keeps its king safe?
    #[must_use]
    pub fn legal_move_exists(&self) -> bool {
        let mover = self.current.side_to_move;
        self.own_squares().any(|(from, piece)| {
            self.pseudo_destinations(from)
                .into_iter()
                .any(|to| !self.is_in_check_after_move(mover, from, to, piece))
        })
    }

    /// Every square the piece on `from` may legally move to, castling included.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut candidates = self.pseudo_destinations(from);
        if let Some((color, Piece::King)) = self.current.board.piece_at(from) {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if let Some(to) = from.offset(0, 2 * side.direction()) {
                    if CastleSide::from_king_move(color, from, to).is_some() {
                        candidates.push(to);
                    }
                }
            }
        }
        candidates.retain(|&to| self.is_move(from, to));
        candidates
    }

    /// All legal `(from, to)` pairs for the side to move, in board order
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.own_squares()
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let position = Position::new();
        assert_eq!(position.legal_moves().len(), 20);
        assert!(position.legal_move_exists());
    }

    #[test]
    fn test_pawn_targets_from_start() {
        let position = Position::new();
        assert_eq!(position.pseudo_destinations(sq("e2")), vec![sq("e3"), sq("e4")]);
        assert!(position.pseudo_destinations(sq("e4")).is_empty());
    }

    #[test]
    fn test_knight_targets_skip_own_pieces() {
        let position = Position::new();
        let mut targets = position.pseudo_destinations(sq("g1"));
        targets.sort();
        assert_eq!(targets, vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn test_slider_stops_at_capture() {
        let mut position = Position::new();
        position.move_piece(sq("e2"), sq("e4"), Piece::Pawn);
        position.move_piece(sq("d7"), sq("d5"), Piece::Pawn);
        position.move_piece(sq("f1"), sq("b5"), Piece::Bishop);
        position.move_piece(sq("a7"), sq("a6"), Piece::Pawn);
        let mut targets = position.pseudo_destinations(sq("b5"));
        targets.sort();
        let mut expected: Vec<Square> = ["a6", "c6", "d7", "e8", "a4", "c4", "d3", "e2", "f1"]
            .iter()
            .map(|s| sq(s))
            .collect();
        expected.sort();
        assert_eq!(targets, expected);
    }

    #[test]
    fn test_castling_is_listed_when_legal() {
        let mut position = Position::new();
        for (from, to, piece) in [
            ("e2", "e4", Piece::Pawn),
            ("e7", "e5", Piece::Pawn),
            ("g1", "f3", Piece::Knight),
            ("b8", "c6", Piece::Knight),
            ("f1", "c4", Piece::Bishop),
            ("g8", "f6", Piece::Knight),
        ] {
            position.move_piece(sq(from), sq(to), piece);
        }
        let destinations = position.legal_destinations(sq("e1"));
        assert!(destinations.contains(&sq("g1")));
        assert!(destinations.contains(&sq("f1")));
        assert!(destinations.contains(&sq("e2")));
        assert!(!destinations.contains(&sq("c1")));
    }
}
