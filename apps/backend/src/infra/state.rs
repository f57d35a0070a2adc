use std::sync::Arc;

use tracing::info;

use crate::config::StoreKind;
use crate::state::app_state::AppState;
use crate::store::{JsonFileStore, MemoryStore, StateStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: Option<Arc<dyn StateStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { store: None }
    }

    pub fn with_store_kind(self, kind: &StoreKind) -> Self {
        match kind {
            StoreKind::File(path) => self.with_store(Arc::new(JsonFileStore::new(path.clone()))),
            StoreKind::Memory => self.with_store(Arc::new(MemoryStore::new())),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Falls back to an in-memory store when none was configured.
    pub fn build(self) -> AppState {
        match self.store {
            Some(store) => AppState::new(store),
            None => {
                info!("no state store configured; using in-memory store");
                AppState::in_memory()
            }
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::GameState;

    #[test]
    fn test_build_succeeds_without_store() {
        let state = build_state().build();
        assert_eq!(state.game.state().unwrap(), GameState::default());
    }

    #[test]
    fn test_file_store_kind_reads_missing_file_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let kind = StoreKind::File(dir.path().join("game_state.json"));
        let state = build_state().with_store_kind(&kind).build();
        assert_eq!(state.game.state().unwrap(), GameState::default());
    }
}
