//! Property-based tests for round resolution and turn sequencing.

use proptest::prelude::*;

use crate::domain::engine::{join_game, play_round, start_game, PlayOutcome};
use crate::domain::moves::{determine_winner, Move, Winner};
use crate::domain::state::{GameState, Slot};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

/// A request as a client could send it: one of the two players or a
/// stranger, with a valid or invalid move name.
fn any_request() -> impl Strategy<Value = (String, String)> {
    let player = prop::sample::select(vec!["Alice", "Bob", "Mallory"]);
    let choice = prop::sample::select(vec!["rock", "paper", "scissors", "lizard"]);
    (player, choice).prop_map(|(p, c)| (p.to_string(), c.to_string()))
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    match state.turn {
        Slot::Player1 => prop_assert!(state.choices.is_empty()),
        Slot::Player2 => {
            prop_assert_eq!(state.choices.len(), 1);
            prop_assert!(state.choices.contains_key(&Slot::Player1));
        }
    }
    let decided = state
        .rounds
        .iter()
        .filter(|r| r.winner != Winner::Tie)
        .count() as u32;
    prop_assert_eq!(state.scores.player1 + state.scores.player2, decided);
    Ok(())
}

proptest! {
    #[test]
    fn prop_swapping_moves_swaps_winner(a in any_move(), b in any_move()) {
        prop_assert_eq!(determine_winner(b, a), determine_winner(a, b).swapped());
    }

    #[test]
    fn prop_winner_is_deterministic(a in any_move(), b in any_move()) {
        prop_assert_eq!(determine_winner(a, b), determine_winner(a, b));
    }

    #[test]
    fn prop_tie_iff_equal(a in any_move(), b in any_move()) {
        prop_assert_eq!(determine_winner(a, b) == Winner::Tie, a == b);
    }

    /// Any sequence of requests keeps the round bookkeeping consistent, and
    /// rejected requests never change the state.
    #[test]
    fn prop_random_requests_preserve_invariants(
        requests in prop::collection::vec(any_request(), 0..40),
    ) {
        let mut state = start_game("Alice");
        join_game(&mut state, "Bob").unwrap();

        for (player, choice) in requests {
            let before = state.clone();
            match play_round(&mut state, &player, &choice) {
                Ok(PlayOutcome::AwaitingOpponent) => {
                    prop_assert_eq!(state.turn, Slot::Player2);
                    prop_assert_eq!(state.rounds.len(), before.rounds.len());
                }
                Ok(PlayOutcome::Resolved(result)) => {
                    prop_assert_eq!(state.turn, Slot::Player1);
                    prop_assert_eq!(state.rounds.len(), before.rounds.len() + 1);
                    prop_assert_eq!(state.rounds.last(), Some(&result));
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
            check_invariants(&state)?;
        }
    }
}
