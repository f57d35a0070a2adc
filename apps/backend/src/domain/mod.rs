//! Domain layer: pure game logic types and transitions.

pub mod engine;
pub mod moves;
pub mod state;

#[cfg(test)]
mod tests_props;

pub use engine::{join_game, play_round, start_game, PlayOutcome};
pub use moves::{determine_winner, Move, Winner};
pub use state::{GameState, RoundResult, Scores, Slot};
