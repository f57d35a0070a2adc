use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::StateStore;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

/// Snapshot kept as one pretty-printed JSON document at a fixed path.
///
/// A missing or undecodable file reads as a fresh default state; it is
/// replaced on the next save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "game_state.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(state: &GameState) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        state
            .serialize(&mut ser)
            .map_err(|e| DomainError::storage(format!("failed to encode game state: {e}")))?;
        Ok(buf)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<GameState, DomainError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no game state file yet");
                return Ok(GameState::default());
            }
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "game state file is unreadable; starting from an empty game"
                );
                Ok(GameState::default())
            }
        }
    }

    fn save(&self, state: &GameState) -> Result<(), DomainError> {
        let bytes = Self::encode(state)?;
        let tmp = self.tmp_path();
        let io_err = |e: std::io::Error| {
            DomainError::storage(format!("failed to write {}: {e}", self.path.display()))
        };

        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            // Best effort.
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        Ok(())
    }
}
