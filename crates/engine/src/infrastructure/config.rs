//! Engine configuration from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DUGOUT_EVENT_STORE` | `memory`, or a path to a SQLite database | `memory` |
//! | `DUGOUT_RULES_PRESET` | `recreational` or `tournament` | `recreational` |
//! | `DUGOUT_RULES_FILE` | JSON rules file; overrides the preset | unset |
//!
//! Log filtering uses `RUST_LOG` (see [`crate::infrastructure::telemetry`]).

use std::path::{Path, PathBuf};

use dugout_domain::GameRules;

/// Where events are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStoreBackend {
    Memory,
    Sqlite(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown rules preset '{0}' (expected 'recreational' or 'tournament')")]
    UnknownPreset(String),
    #[error("Could not read rules file {path}: {source}")]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid rules in {path}: {message}")]
    InvalidRules { path: PathBuf, message: String },
}

/// Runtime configuration for [`crate::App`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub event_store: EventStoreBackend,
    /// Rules applied to games started without explicit rules
    pub default_rules: GameRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            event_store: EventStoreBackend::Memory,
            default_rules: GameRules::recreational(),
        }
    }
}

impl EngineConfig {
    /// Load `.env` files from the repo root, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let event_store = match lookup("DUGOUT_EVENT_STORE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            None => EventStoreBackend::Memory,
            Some(value) if value.eq_ignore_ascii_case("memory") => EventStoreBackend::Memory,
            Some(path) => EventStoreBackend::Sqlite(PathBuf::from(path)),
        };

        let default_rules = match lookup("DUGOUT_RULES_FILE").filter(|s| !s.trim().is_empty()) {
            Some(path) => load_rules_file(Path::new(path.trim()))?,
            None => {
                let preset = lookup("DUGOUT_RULES_PRESET").unwrap_or_else(|| "recreational".into());
                rules_preset(&preset)?
            }
        };

        Ok(Self {
            event_store,
            default_rules,
        })
    }
}

fn rules_preset(name: &str) -> Result<GameRules, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "" | "recreational" => Ok(GameRules::recreational()),
        "tournament" => Ok(GameRules::tournament()),
        _ => Err(ConfigError::UnknownPreset(name.to_string())),
    }
}

/// Parse a rules file. Deserialization runs the same validation as
/// `GameRules::new`, so an invalid policy never loads.
fn load_rules_file(path: &Path) -> Result<GameRules, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::RulesFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|e| ConfigError::InvalidRules {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
