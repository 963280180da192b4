//! Application state and composition.

use std::sync::Arc;

use anyhow::Context;
use dugout_domain::GameRules;

use crate::infrastructure::{
    clock::SystemClock,
    config::{EngineConfig, EventStoreBackend},
    memory::{InMemoryEventStore, InMemoryGameRepo, InMemoryInningPlayRepo, InMemoryLineupRepo},
    ports::{ClockPort, EventStore, GameRepo, InningPlayRepo, LineupRepo},
    sqlite_event_store::SqliteEventStore,
};
use crate::use_cases::{RecordAtBat, StartGame, SubstitutePlayer};

/// Main application state.
///
/// Holds the repository ports and the use cases wired against them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the repository ports.
pub struct Repositories {
    pub game: Arc<dyn GameRepo>,
    pub inning_play: Arc<dyn InningPlayRepo>,
    pub lineup: Arc<dyn LineupRepo>,
    pub event_store: Arc<dyn EventStore>,
}

/// Container for all use cases.
pub struct UseCases {
    pub start_game: Arc<StartGame>,
    pub record_at_bat: Arc<RecordAtBat>,
    pub substitute_player: Arc<SubstitutePlayer>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repositories: Repositories, default_rules: GameRules) -> Self {
        let start_game = Arc::new(StartGame::new(
            repositories.game.clone(),
            repositories.inning_play.clone(),
            repositories.lineup.clone(),
            repositories.event_store.clone(),
            default_rules,
        ));
        let record_at_bat = Arc::new(RecordAtBat::new(
            repositories.game.clone(),
            repositories.inning_play.clone(),
            repositories.lineup.clone(),
            repositories.event_store.clone(),
        ));
        let substitute_player = Arc::new(SubstitutePlayer::new(
            repositories.game.clone(),
            repositories.lineup.clone(),
            repositories.event_store.clone(),
        ));

        Self {
            repositories,
            use_cases: UseCases {
                start_game,
                record_at_bat,
                substitute_player,
            },
        }
    }

    /// Everything in memory, recreational rules by default.
    pub fn in_memory() -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Self::new(
            in_memory_repositories(Arc::new(InMemoryEventStore::new(clock))),
            GameRules::recreational(),
        )
    }

    /// Wire the app from configuration, opening the SQLite event store if one
    /// is configured.
    pub async fn from_config(config: &EngineConfig) -> anyhow::Result<Self> {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let event_store: Arc<dyn EventStore> = match &config.event_store {
            EventStoreBackend::Memory => Arc::new(InMemoryEventStore::new(clock)),
            EventStoreBackend::Sqlite(path) => {
                let path = path.to_string_lossy();
                let store = SqliteEventStore::new(&path, clock)
                    .await
                    .with_context(|| format!("Failed to open event store at {}", path))?;
                Arc::new(store)
            }
        };

        tracing::info!(
            event_store = ?config.event_store,
            innings = config.default_rules.total_innings(),
            "Engine configured"
        );

        Ok(Self::new(
            in_memory_repositories(event_store),
            config.default_rules.clone(),
        ))
    }
}

fn in_memory_repositories(event_store: Arc<dyn EventStore>) -> Repositories {
    Repositories {
        game: Arc::new(InMemoryGameRepo::new()),
        inning_play: Arc::new(InMemoryInningPlayRepo::new()),
        lineup: Arc::new(InMemoryLineupRepo::new()),
        event_store,
    }
}
