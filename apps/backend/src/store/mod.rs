//! Persistence port for the single game snapshot.

pub mod file;
pub mod memory;

use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save of one full `GameState` snapshot.
///
/// `load` never fails because no game exists yet: implementations return
/// `GameState::default()` when there is nothing usable to read.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<GameState, DomainError>;
    fn save(&self, state: &GameState) -> Result<(), DomainError>;
}
