//! Zobrist hashing for chess positions.
//!
//! A position key covers the board, the side to move and the six castling
//! flags: exactly what makes two positions identical for repetition purposes.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingRights, Color, SQUARE_COUNT};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; SQUARE_COUNT]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // one key per castling flag bit
    pub(crate) castling_keys: [u64; 6],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; SQUARE_COUNT]; 2]; 6];
        let mut castling_keys = [0; 6];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of (board, side to move, castling flags).
#[must_use]
pub fn position_key(board: &Board, side_to_move: Color, castling: CastlingRights) -> u64 {
    let mut hash = 0;

    for (sq, color, piece) in board.pieces() {
        hash ^= ZOBRIST.piece_keys[piece.index()][color.index()][sq.index()];
    }

    if side_to_move == Color::Black {
        hash ^= ZOBRIST.black_to_move_key;
    }

    let flags = castling.as_u8();
    for (bit, key) in ZOBRIST.castling_keys.iter().enumerate() {
        if flags & (1 << bit) != 0 {
            hash ^= key;
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_move_changes_key() {
        let board = Board::starting();
        let white = position_key(&board, Color::White, CastlingRights::unmoved());
        let black = position_key(&board, Color::Black, CastlingRights::unmoved());
        assert_ne!(white, black);
    }

    #[test]
    fn test_castling_flags_change_key() {
        let board = Board::starting();
        let mut rights = CastlingRights::unmoved();
        let before = position_key(&board, Color::White, rights);
        rights.mark_king_moved(Color::White);
        assert_ne!(before, position_key(&board, Color::White, rights));
    }

    #[test]
    fn test_key_is_deterministic() {
        let board = Board::starting();
        assert_eq!(
            position_key(&board, Color::White, CastlingRights::unmoved()),
            position_key(&Board::starting(), Color::White, CastlingRights::unmoved())
        );
    }
}
