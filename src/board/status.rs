//! Terminal-state classification.
//!
//! The engine never ends a game by itself. Callers poll after every move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Why a game ended drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    InsufficientMaterial,
    FiftyMove,
    Repetition,
    /// Both players agreed to a draw
    Agreement,
}

/// Outcome of polling a position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Resigned { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Position {
    /// The side to move is in check and has no legal move.
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.is_in_check(self.current.side_to_move) && !self.legal_move_exists()
    }

    /// The side to move is not in check and has no legal move.
    #[must_use]
    pub fn stalemate(&self) -> bool {
        !self.is_in_check(self.current.side_to_move) && !self.legal_move_exists()
    }

    /// Classify the position.
    ///
    /// A resignation or agreed draw wins over everything. Otherwise checkmate
    /// and stalemate come first, then insufficient material, then the
    /// claimable draws of [`Position::draw_status`].
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(outcome) = self.concluded {
            return outcome;
        }
        let mover = self.current.side_to_move;
        if !self.legal_move_exists() {
            return if self.is_in_check(mover) {
                GameStatus::Checkmate {
                    winner: mover.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.checkmate_impossible() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        match self.draw_status().reason() {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::InProgress,
        }
    }

    /// `color` gives up. Returns the final status; a game that is already
    /// over keeps its result.
    pub fn resign(&mut self, color: Color) -> GameStatus {
        self.conclude(GameStatus::Resigned {
            winner: color.opponent(),
        })
    }

    /// End the game as a draw by agreement, unless it is already over.
    pub fn agree_draw(&mut self) -> GameStatus {
        self.conclude(GameStatus::Draw(DrawReason::Agreement))
    }

    fn conclude(&mut self, outcome: GameStatus) -> GameStatus {
        let status = self.status();
        if status.is_terminal() {
            return status;
        }
        debug_log!("game concluded at ply {}: {:?}", self.ply_count(), outcome);
        self.concluded = Some(outcome);
        outcome
    }
}
