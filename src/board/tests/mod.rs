//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Per-piece move rules, castling and en passant
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `edge_cases.rs` - Checkmate, stalemate, promotion and replay
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Piece, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

/// Play a move written as `e2e4` (or `a7a8q`), panicking if it is illegal.
pub(super) fn apply_uci(position: &mut Position, uci: &str) {
    let from = sq(&uci[0..2]);
    let to = sq(&uci[2..4]);
    let promotion = uci[4..].chars().next().and_then(Piece::from_char);
    position
        .try_move(from, to, promotion)
        .unwrap_or_else(|e| panic!("{uci} rejected: {e}"));
}

pub(super) fn play_all(position: &mut Position, moves: &[&str]) {
    for uci in moves {
        apply_uci(position, uci);
    }
}
