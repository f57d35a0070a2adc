use parking_lot::RwLock;

use super::StateStore;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

/// In-process snapshot holder; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<GameState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing snapshot.
    pub fn with_state(state: GameState) -> Self {
        Self {
            snapshot: RwLock::new(Some(state)),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<GameState, DomainError> {
        Ok(self.snapshot.read().clone().unwrap_or_default())
    }

    fn save(&self, state: &GameState) -> Result<(), DomainError> {
        *self.snapshot.write() = Some(state.clone());
        Ok(())
    }
}
