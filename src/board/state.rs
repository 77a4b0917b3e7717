use super::{Board, CastlingRights, Color, GameStatus, MoveRecord, Piece, Square};
use crate::zobrist::position_key;

/// Everything that identifies a position for rule purposes: the board, the
/// side to move and the castling flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Snapshot {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
}

impl Snapshot {
    pub(crate) fn starting() -> Self {
        Snapshot {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::unmoved(),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> u64 {
        position_key(&self.board, self.side_to_move, self.castling)
    }
}

/// One game in progress: the live board plus the append-only move history it
/// was produced from.
///
/// Side to move, castling flags and en-passant eligibility are all consequences
/// of the history. Reconstructing a game from its history
/// ([`Position::from_history`]) runs the very same move operator as live play.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) current: Snapshot,
    pub(crate) initial: Snapshot,
    pub(crate) history: Vec<MoveRecord>,
    /// Result fixed by resignation or agreement
    pub(crate) concluded: Option<GameStatus>,
}

impl Position {
    /// A fresh game: starting array, White to move
    #[must_use]
    pub fn new() -> Self {
        Position::from_snapshot(Snapshot::starting())
    }

    pub(crate) fn from_snapshot(initial: Snapshot) -> Self {
        Position {
            current: initial,
            initial,
            history: Vec::new(),
            concluded: None,
        }
    }

    /// Continue a stored game by replaying its moves from the starting array.
    ///
    /// The moves are trusted, exactly like [`Position::move_piece`]; use
    /// [`Position::replay_checked`] for histories from an untrusted source.
    #[must_use]
    pub fn from_history<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MoveRecord>,
    {
        let mut position = Position::new();
        for record in records {
            position.move_piece(record.from(), record.to(), record.piece().1);
        }
        position
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current.board
    }

    /// The colored piece on `sq`, or `None` for an empty square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.current.board.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.current.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.current.side_to_move == Color::White
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.current.castling
    }

    /// All moves played so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Number of half-moves played
    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Zobrist key of the live position (board, side to move, castling flags)
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.current.key()
    }

    /// Walk the history again from the initial state.
    pub(crate) fn replay(&self) -> Replay<'_> {
        Replay {
            state: self.initial,
            moves: self.history.iter(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Iterator over `(state before the move, move)` pairs of a game's history.
pub(crate) struct Replay<'a> {
    state: Snapshot,
    moves: std::slice::Iter<'a, MoveRecord>,
}

impl<'a> Replay<'a> {
    /// State after every move yielded so far
    pub(crate) fn state(&self) -> &Snapshot {
        &self.state
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = (Snapshot, &'a MoveRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.moves.next()?;
        let before = self.state;
        self.state.apply(record.from(), record.to(), record.piece().1);
        Some((before, record))
    }
}
