use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATE_FILE: &str = "game_state.json";
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Where the game snapshot lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    /// JSON document on disk
    File(PathBuf),
    /// Process memory only (lost on restart)
    Memory,
}

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT`, `GAME_STORE`, `GAME_STATE_FILE`
    /// and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("GAME_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreKind::File(
                lookup("GAME_STATE_FILE")
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_STATE_FILE.to_string())
                    .into(),
            ),
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(AppError::config(format!(
                    "GAME_STORE must be 'file' or 'memory', got '{other}'"
                )))
            }
        };

        let cors_origins = parse_origins(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            store,
            cors_origins,
        })
    }
}

/// Comma-separated origins; blank, "null" and non-http entries are dropped.
/// Falls back to the local web client when nothing valid remains.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
