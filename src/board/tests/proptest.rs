//! Property-based tests using proptest.

use crate::board::{Piece, Position, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves, promoting to a queen when needed
fn random_game(seed: u64, plies: usize) -> Position {
    let mut position = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[rng.gen_range(0..moves.len())];
        let promotion = position
            .requires_promotion(from, to)
            .then_some(Piece::Queen);
        position.try_move(from, to, promotion).unwrap();
    }
    position
}

fn is_castling(position: &Position, from: Square, to: Square) -> bool {
    matches!(position.piece_at(from), Some((_, Piece::King))) && from.file().abs_diff(to.file()) == 2
}

proptest! {
    /// Property: replaying the history reproduces the live position exactly
    #[test]
    fn prop_replay_reproduces_position(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_game(seed, num_moves);
        let replayed = Position::from_history(position.history().iter().copied());

        prop_assert_eq!(replayed.board(), position.board());
        prop_assert_eq!(replayed.side_to_move(), position.side_to_move());
        prop_assert_eq!(replayed.castling_rights(), position.castling_rights());
        prop_assert_eq!(replayed.hash(), position.hash());

        let checked = Position::replay_checked(position.history().iter().copied());
        prop_assert!(checked.is_ok());
    }

    /// Property: legal_move_exists agrees with the full move list
    #[test]
    fn prop_legal_move_exists_matches_move_list(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_game(seed, num_moves);
        let has_plain_move = position
            .legal_moves()
            .into_iter()
            .any(|(from, to)| !is_castling(&position, from, to));
        prop_assert_eq!(position.legal_move_exists(), has_plain_move);
    }

    /// Property: no legal move leaves the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        let position = random_game(seed, num_moves);
        let mover = position.side_to_move();
        for (from, to) in position.legal_moves() {
            let mut next = position.clone();
            let promotion = next.requires_promotion(from, to).then_some(Piece::Knight);
            prop_assert!(next.try_move(from, to, promotion).is_ok());
            prop_assert!(!next.is_in_check(mover), "{}-{} left king in check", from, to);
        }
    }

    /// Property: an empty square is never the origin of a move
    #[test]
    fn prop_empty_squares_never_move(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_game(seed, num_moves);
        for from in Square::all().filter(|&s| position.piece_at(s).is_none()) {
            for to in Square::all() {
                prop_assert!(!position.is_move(from, to));
            }
        }
    }
}
