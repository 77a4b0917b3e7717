//! Draw detection: fifty-move rule, threefold repetition and insufficient
//! material.
//!
//! Nothing here is cached. Both claimable draws replay the whole history from
//! the initial state, so their cost grows with the length of the game.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Snapshot;
use super::status::DrawReason;
use super::{MoveRecord, Piece, Position, Square, SQUARE_COUNT};

/// Plies without a pawn move or capture that make a fifty-move draw
const FIFTY_MOVE_PLIES: usize = 100;

/// Claimable draw found by [`Position::draw_status`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawStatus {
    NoDraw,
    FiftyMove,
    Repetition,
}

impl DrawStatus {
    #[must_use]
    pub fn is_draw(self) -> bool {
        self != DrawStatus::NoDraw
    }

    /// The matching [`DrawReason`], if this is a draw
    #[must_use]
    pub fn reason(self) -> Option<DrawReason> {
        match self {
            DrawStatus::NoDraw => None,
            DrawStatus::FiftyMove => Some(DrawReason::FiftyMove),
            DrawStatus::Repetition => Some(DrawReason::Repetition),
        }
    }
}

/// Occurrence counts keyed by position hash
#[derive(Clone, Debug, Default)]
struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    fn increment(&mut self, hash: u64) -> u32 {
        let entry = self.counts.entry(hash).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}

impl Snapshot {
    fn moves_pawn(&self, record: &MoveRecord) -> bool {
        matches!(self.board.piece_at(record.from()), Some((_, Piece::Pawn)))
    }

    fn is_capture(&self, record: &MoveRecord) -> bool {
        !self.board.is_empty(record.to())
    }

    fn is_castling(&self, record: &MoveRecord) -> bool {
        matches!(self.board.piece_at(record.from()), Some((_, Piece::King)))
            && record.from().index().abs_diff(record.to().index()) == 2
    }

    /// After `last`, could the opponent capture en passant right now?
    fn allows_en_passant(&self, last: &MoveRecord) -> bool {
        let to = last.to();
        let pawn_color = match self.board.piece_at(to) {
            Some((color, Piece::Pawn)) => color,
            _ => return false,
        };
        if last.from().index().abs_diff(to.index()) != 16 {
            return false;
        }
        [-1, 1]
            .iter()
            .filter_map(|&df| to.offset(0, df))
            .any(|sq| self.board.piece_at(sq) == Some((pawn_color.opponent(), Piece::Pawn)))
    }
}

impl Position {
    /// Check the claimable draws, fifty-move rule first.
    #[must_use]
    pub fn draw_status(&self) -> DrawStatus {
        debug_log!("evaluating draw status at ply {}", self.ply_count());
        let status = if self.fifty_move_draw() {
            DrawStatus::FiftyMove
        } else if self.repetition_draw() {
            DrawStatus::Repetition
        } else {
            DrawStatus::NoDraw
        };
        debug_log!("draw status: {:?}", status);
        status
    }

    /// True once the last 100 plies contain no pawn move and no capture.
    #[must_use]
    pub fn fifty_move_draw(&self) -> bool {
        let len = self.history.len();
        if len < FIFTY_MOVE_PLIES {
            return false;
        }
        let window_start = len - FIFTY_MOVE_PLIES;
        for (ply, (before, record)) in self.replay().enumerate() {
            if before.moves_pawn(record) || before.is_capture(record) {
                if ply + 1 > window_start {
                    debug_log!("fifty-move window broken at ply {}", ply);
                    return false;
                }
            }
        }
        true
    }

    /// Can the side to move claim a draw by threefold repetition?
    ///
    /// The claim holds when the live position, or any position the side to
    /// move reaches with one quiet non-pawn move, already occurred twice since
    /// the last irreversible move. The position before the final ply is never
    /// counted.
    #[must_use]
    pub fn repetition_draw(&self) -> bool {
        let table = self.reversible_occurrences();
        let repeated = self
            .repetition_references()
            .into_iter()
            .any(|reference| table.get(reference.key()) >= 2);
        if repeated {
            debug_log!("repetition found at ply {}", self.ply_count());
        }
        repeated
    }

    /// Ply after the last pawn move, capture or castling
    fn last_irreversible_ply(&self) -> usize {
        let mut start = 0;
        for (ply, (before, record)) in self.replay().enumerate() {
            if before.moves_pawn(record) || before.is_capture(record) || before.is_castling(record) {
                start = ply + 1;
            }
        }
        start
    }

    /// Count every position from the last irreversible move up to, but not
    /// including, the position before the final ply.
    fn reversible_occurrences(&self) -> RepetitionTable {
        let len = self.history.len();
        let mut start = self.last_irreversible_ply();
        let mut replay = self.replay();
        replay.by_ref().take(start).for_each(drop);
        let mut state = *replay.state();

        // skip a position with an en-passant capture pending
        if start > 0 && start < len && state.allows_en_passant(&self.history[start - 1]) {
            let record = &self.history[start];
            state.apply(record.from(), record.to(), record.piece().1);
            start += 1;
        }

        let mut table = RepetitionTable::default();
        let end = len.saturating_sub(1);
        for record in self.history.get(start..end).unwrap_or_default() {
            table.increment(state.key());
            state.apply(record.from(), record.to(), record.piece().1);
        }
        table
    }

    /// The live position plus every position one quiet piece move away.
    ///
    /// The hypothetical moves keep the live castling flags and are not tested
    /// for king safety.
    fn repetition_references(&self) -> Vec<Snapshot> {
        let mover = self.current.side_to_move;
        let mut references = vec![self.current];
        for (from, color, piece) in self.current.board.pieces() {
            if color != mover || piece == Piece::Pawn {
                continue;
            }
            for to in self.pseudo_destinations(from) {
                if !self.current.board.is_empty(to) {
                    continue;
                }
                let mut reference = self.current;
                reference.board.set_piece(to, color, piece);
                reference.board.clear(from);
                reference.side_to_move = mover.opponent();
                references.push(reference);
            }
        }
        references
    }

    /// True when neither side can ever deliver mate.
    ///
    /// Any rook, queen or pawn means mate is possible. Otherwise the minor
    /// pieces must be one lone knight, or bishops that all share a shade.
    /// Kings are ignored. Pawn blockades are not analysed.
    #[must_use]
    pub fn checkmate_impossible(&self) -> bool {
        let mut knight_found = false;
        let mut shade: Option<usize> = None;
        for (sq, _, piece) in self.current.board.pieces() {
            match piece {
                Piece::Rook | Piece::Queen | Piece::Pawn => return false,
                Piece::Knight => {
                    if knight_found || shade.is_some() {
                        return false;
                    }
                    knight_found = true;
                }
                Piece::Bishop => {
                    if knight_found {
                        return false;
                    }
                    match shade {
                        None => shade = Some(bishop_shade(sq)),
                        Some(seen) if seen != bishop_shade(sq) => return false,
                        Some(_) => {}
                    }
                }
                Piece::King => {}
            }
        }
        true
    }
}

/// Shade used by the insufficient-material test.
///
/// The modulus is taken against the square count rather than the board width,
/// so this is the parity of the file, not the color of the square: `a1` and
/// `b2` count as different shades.
fn bishop_shade(sq: Square) -> usize {
    let index = sq.index();
    (index / SQUARE_COUNT + index % SQUARE_COUNT) % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repetition_table_counts() {
        let mut table = RepetitionTable::default();
        assert_eq!(table.get(42), 0);
        assert_eq!(table.increment(42), 1);
        assert_eq!(table.increment(42), 2);
        assert_eq!(table.get(7), 0);
    }

    #[test]
    fn test_draw_status_reasons() {
        assert_eq!(DrawStatus::NoDraw.reason(), None);
        assert_eq!(DrawStatus::FiftyMove.reason(), Some(DrawReason::FiftyMove));
        assert!(DrawStatus::Repetition.is_draw());
        assert!(!DrawStatus::NoDraw.is_draw());
    }

    #[test]
    fn test_bishop_shade_is_file_parity() {
        let a1: Square = "a1".parse().unwrap();
        let b2: Square = "b2".parse().unwrap();
        let c1: Square = "c1".parse().unwrap();
        assert_ne!(bishop_shade(a1), bishop_shade(b2));
        assert_eq!(bishop_shade(a1), bishop_shade(c1));
    }

    #[test]
    fn test_fresh_game_has_no_draw() {
        let position = Position::new();
        assert_eq!(position.draw_status(), DrawStatus::NoDraw);
        assert!(!position.checkmate_impossible());
    }
}
