//! Turn sequencing and round resolution.
//!
//! Every transition validates all of its preconditions before touching the
//! state, so a returned error always leaves the `GameState` as it was.

use crate::domain::moves::{determine_winner, Move};
use crate::domain::state::{GameState, RoundResult, Slot};
use crate::errors::domain::DomainError;

/// What a successful play did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Player 1 moved; the round waits for player 2.
    AwaitingOpponent,
    /// Player 2 moved and the round was resolved.
    Resolved(RoundResult),
}

/// Fresh state for a new game, discarding whatever was there before.
pub fn start_game(player1: impl Into<String>) -> GameState {
    GameState {
        player1: player1.into(),
        ..GameState::default()
    }
}

/// Register the second player and open play.
pub fn join_game(state: &mut GameState, player2: impl Into<String>) -> Result<(), DomainError> {
    if state.player1.is_empty() {
        return Err(DomainError::invalid_state(
            "Game not started. Player 1 must start the game first.",
        ));
    }
    if !state.player2.is_empty() {
        return Err(DomainError::invalid_state("Game already has two players."));
    }

    state.player2 = player2.into();
    state.game_started = true;
    state.turn = Slot::Player1;
    Ok(())
}

/// Record `player`'s move and resolve the round once both slots have moved.
///
/// `choice` is the raw move name from the request; it is checked last.
pub fn play_round(
    state: &mut GameState,
    player: &str,
    choice: &str,
) -> Result<PlayOutcome, DomainError> {
    if !state.game_started {
        return Err(DomainError::invalid_state("Game has not started yet."));
    }

    if state.slots_named(player).next().is_none() {
        return Err(DomainError::invalid_input("Invalid player."));
    }

    // Turn is matched by name, so a name held by both slots is always out of turn
    // for one of them.
    if let Some(slot) = state.slots_named(player).find(|slot| *slot != state.turn) {
        return Err(DomainError::invalid_state(format!(
            "Not {}'s turn.",
            slot.label()
        )));
    }

    let mv: Move = choice.parse()?;

    match state.turn {
        Slot::Player1 => {
            state.choices.insert(Slot::Player1, mv);
            state.turn = Slot::Player2;
            Ok(PlayOutcome::AwaitingOpponent)
        }
        Slot::Player2 => {
            let Some(first) = state.choices.get(&Slot::Player1).copied() else {
                return Err(DomainError::invalid_state(
                    "Both players must choose before determining the winner.",
                ));
            };

            let result = RoundResult {
                player1: first,
                player2: mv,
                winner: determine_winner(first, mv),
            };

            state.scores.credit(result.winner);
            state.rounds.push(result);
            state.choices.clear();
            state.turn = Slot::Player1;
            Ok(PlayOutcome::Resolved(result))
        }
    }
}
