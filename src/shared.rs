//! A position shared between threads.
//!
//! The input layer and the synchronisation layer usually run on different
//! threads but play into the same game. Every call below holds the lock for
//! its whole duration, so a validate-then-apply sequence cannot interleave
//! with another move.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{
    Color, DrawStatus, GameStatus, MoveError, MoveRecord, Piece, Position, PositionError, Square,
};

/// Cloneable handle to one game in progress
#[derive(Clone, Debug, Default)]
pub struct SharedPosition {
    position: Arc<Mutex<Position>>,
}

impl SharedPosition {
    #[must_use]
    pub fn new(position: Position) -> Self {
        SharedPosition {
            position: Arc::new(Mutex::new(position)),
        }
    }

    /// Run a closure with exclusive access to the position.
    pub fn with_position<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Position) -> R,
    {
        f(&mut self.position.lock())
    }

    /// Run a closure with read access to the position.
    pub fn with_position_ref<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Position) -> R,
    {
        f(&self.position.lock())
    }

    #[must_use]
    pub fn is_move(&self, from: Square, to: Square) -> bool {
        self.position.lock().is_move(from, to)
    }

    /// Validate and apply a move under one lock
    pub fn try_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveRecord, MoveError> {
        self.position.lock().try_move(from, to, promotion)
    }

    /// Append moves received from a peer, validating each one
    pub fn extend_checked<I>(&self, records: I) -> Result<(), PositionError>
    where
        I: IntoIterator<Item = MoveRecord>,
    {
        self.position.lock().extend_checked(records)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.lock().side_to_move()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.lock().status()
    }

    /// `color` resigns; returns the final status
    pub fn resign(&self, color: Color) -> GameStatus {
        self.position.lock().resign(color)
    }

    pub fn agree_draw(&self) -> GameStatus {
        self.position.lock().agree_draw()
    }

    #[must_use]
    pub fn draw_status(&self) -> DrawStatus {
        self.position.lock().draw_status()
    }

    /// Copy of the full move history
    #[must_use]
    pub fn history(&self) -> Vec<MoveRecord> {
        self.position.lock().history().to_vec()
    }

    /// Clone of the current position
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.position.lock().clone()
    }
}

impl From<Position> for SharedPosition {
    fn from(position: Position) -> Self {
        SharedPosition::new(position)
    }
}
