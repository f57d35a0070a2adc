use std::sync::Arc;

use crate::services::game::GameService;
use crate::store::{MemoryStore, StateStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The single game this process serves
    pub game: Arc<GameService>,
}

impl AppState {
    /// Create a new AppState backed by the given store
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            game: Arc::new(GameService::new(store)),
        }
    }

    /// Create an AppState with a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
