//! Game service - bridges the pure round engine with the state store.
//!
//! Each operation loads the snapshot, applies one engine transition and saves
//! the result. A failed transition returns before anything is saved.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::engine::{self, PlayOutcome};
use crate::domain::state::{GameState, Scores, Slot};
use crate::error::AppError;
use crate::store::StateStore;

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub outcome: PlayOutcome,
    pub turn: Slot,
    pub scores: Scores,
}

pub struct GameService {
    store: Arc<dyn StateStore>,
    // Serializes load -> transition -> save so concurrent requests can't drop writes.
    op_lock: Mutex<()>,
}

impl GameService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            op_lock: Mutex::new(()),
        }
    }

    /// Overwrite any existing game with a fresh one for `player1`.
    pub fn start(&self, player1: &str) -> Result<GameState, AppError> {
        let _guard = self.op_lock.lock();

        let state = engine::start_game(player1);
        self.store.save(&state)?;

        info!(player1 = %player1, "game_started");
        Ok(state)
    }

    pub fn join(&self, player2: &str) -> Result<GameState, AppError> {
        let _guard = self.op_lock.lock();

        let mut state = self.store.load()?;
        if let Err(e) = engine::join_game(&mut state, player2) {
            debug!(player2 = %player2, error = %e, "join rejected");
            return Err(e.into());
        }
        self.store.save(&state)?;

        info!(player1 = %state.player1, player2 = %player2, "player_joined");
        Ok(state)
    }

    pub fn play(&self, player: &str, choice: &str) -> Result<PlayReport, AppError> {
        let _guard = self.op_lock.lock();

        let mut state = self.store.load()?;
        let outcome = match engine::play_round(&mut state, player, choice) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(player = %player, choice = %choice, error = %e, "play rejected");
                return Err(e.into());
            }
        };
        self.store.save(&state)?;

        match outcome {
            PlayOutcome::AwaitingOpponent => {
                info!(player = %player, "move_recorded");
            }
            PlayOutcome::Resolved(result) => {
                info!(
                    round = state.rounds.len(),
                    player1_move = %result.player1,
                    player2_move = %result.player2,
                    winner = ?result.winner,
                    "round_resolved"
                );
            }
        }

        Ok(PlayReport {
            outcome,
            turn: state.turn,
            scores: state.scores,
        })
    }

    /// Current snapshot; an empty unstarted game if nothing was stored yet.
    pub fn state(&self) -> Result<GameState, AppError> {
        let _guard = self.op_lock.lock();
        Ok(self.store.load()?)
    }
}
