//! Checked wrappers around the trusted mover.
//!
//! These are for input that has not been validated yet: moves typed by a
//! player, or a history received from storage or a remote peer.

use super::error::{MoveError, PositionError};
use super::{MoveRecord, Piece, Position, Square};

impl Position {
    /// Does moving the piece on `from` to `to` need a promotion choice?
    #[must_use]
    pub fn requires_promotion(&self, from: Square, to: Square) -> bool {
        let mover = self.current.side_to_move;
        self.current.board.piece_at(from) == Some((mover, Piece::Pawn))
            && to.rank() == mover.pawn_promotion_rank()
    }

    /// Validate and play a move.
    ///
    /// `promotion` must be given exactly when a pawn reaches its last rank, and
    /// must then be a queen, rook, knight or bishop. On success the move has
    /// been applied and its record is returned.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveRecord, MoveError> {
        if self.concluded.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.is_move(from, to) {
            return Err(MoveError::Illegal { from, to });
        }
        let landed = self.landed_piece(from, to, promotion)?;
        let record = MoveRecord::new(self.current.side_to_move, landed, from, to);
        self.move_piece(from, to, landed);
        Ok(record)
    }

    fn landed_piece(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Piece, MoveError> {
        match (self.requires_promotion(from, to), promotion) {
            (true, None) => Err(MoveError::PromotionRequired { to }),
            (true, Some(piece)) if piece.is_promotion_choice() => Ok(piece),
            (_, Some(piece)) => Err(MoveError::InvalidPromotion { piece }),
            (false, None) => self
                .current
                .board
                .piece_at(from)
                .map(|(_, piece)| piece)
                .ok_or(MoveError::Illegal { from, to }),
        }
    }

    /// Rebuild a game from an untrusted history.
    ///
    /// Unlike [`Position::from_history`], every record must be a legal move for
    /// the side to move, landing the moving piece (or a valid promotion piece).
    pub fn replay_checked<I>(records: I) -> Result<Position, PositionError>
    where
        I: IntoIterator<Item = MoveRecord>,
    {
        let mut position = Position::new();
        position.extend_checked(records)?;
        Ok(position)
    }

    /// Append an untrusted sequence of moves to this game, stopping at the
    /// first illegal one. Moves before it stay applied.
    pub fn extend_checked<I>(&mut self, records: I) -> Result<(), PositionError>
    where
        I: IntoIterator<Item = MoveRecord>,
    {
        for record in records {
            let ply = self.ply_count();
            if !self.accepts(&record) {
                debug_log!("rejected history move {} at ply {}", record, ply);
                return Err(PositionError::IllegalHistoryMove { ply, record });
            }
            self.move_piece(record.from(), record.to(), record.piece().1);
        }
        Ok(())
    }

    fn accepts(&self, record: &MoveRecord) -> bool {
        let (color, piece) = record.piece();
        if color != self.current.side_to_move || !self.is_move(record.from(), record.to()) {
            return false;
        }
        let promotion = if self.requires_promotion(record.from(), record.to()) {
            Some(piece)
        } else if self.current.board.piece_at(record.from()) == Some((color, piece)) {
            None
        } else {
            return false;
        };
        self.landed_piece(record.from(), record.to(), promotion).is_ok()
    }
}
