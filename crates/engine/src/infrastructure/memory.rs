//! In-memory adapters backed by `DashMap`.
//!
//! Used by tests and by the default composition. State lives for the life of
//! the process.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use dugout_domain::{DomainEvent, Game, GameId, InningPlay, TeamLineup, TeamSide};

use crate::infrastructure::ports::{
    ClockPort, EventStore, GameRepo, InningPlayRepo, LineupRepo, RepoError, StoredEvent,
    StreamAppend,
};

// =============================================================================
// Aggregate Repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryGameRepo {
    games: DashMap<GameId, Game>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError> {
        Ok(self.games.get(&id).map(|game| game.clone()))
    }

    async fn save(&self, game: &Game) -> Result<(), RepoError> {
        self.games.insert(game.id(), game.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryInningPlayRepo {
    plays: DashMap<GameId, InningPlay>,
}

impl InMemoryInningPlayRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InningPlayRepo for InMemoryInningPlayRepo {
    async fn get_for_game(&self, game_id: GameId) -> Result<Option<InningPlay>, RepoError> {
        Ok(self.plays.get(&game_id).map(|play| play.clone()))
    }

    async fn save(&self, inning_play: &InningPlay) -> Result<(), RepoError> {
        self.plays.insert(inning_play.game_id(), inning_play.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryLineupRepo {
    lineups: DashMap<(GameId, TeamSide), TeamLineup>,
}

impl InMemoryLineupRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LineupRepo for InMemoryLineupRepo {
    async fn get_for_game(
        &self,
        game_id: GameId,
        side: TeamSide,
    ) -> Result<Option<TeamLineup>, RepoError> {
        Ok(self
            .lineups
            .get(&(game_id, side))
            .map(|lineup| lineup.clone()))
    }

    async fn save(&self, lineup: &TeamLineup) -> Result<(), RepoError> {
        self.lineups
            .insert((lineup.game_id(), lineup.side()), lineup.clone());
        Ok(())
    }
}

// =============================================================================
// Event Store
// =============================================================================

/// Event streams held in memory.
///
/// Appends are serialized by `write_lock`: a batch is checked and staged
/// against every stream before any of them is extended. Reads skip the lock.
pub struct InMemoryEventStore {
    streams: DashMap<String, Vec<StoredEvent>>,
    write_lock: Mutex<()>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryEventStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            streams: DashMap::new(),
            write_lock: Mutex::new(()),
            clock,
        }
    }

    fn version_of(&self, stream_id: &str) -> u64 {
        self.streams
            .get(stream_id)
            .map(|stream| stream.len() as u64)
            .unwrap_or(0)
    }

    /// Check expected versions and serialize events without touching a stream.
    ///
    /// A stream named twice in one batch continues from its staged version.
    fn stage(&self, batch: &[StreamAppend]) -> Result<Vec<(Vec<StoredEvent>, u64)>, RepoError> {
        let recorded_at = self.clock.now();
        let mut staged_versions: HashMap<&str, u64> = HashMap::new();
        let mut staged = Vec::with_capacity(batch.len());

        for append in batch {
            let stream_id = append.stream_id.as_str();
            let current = match staged_versions.get(stream_id) {
                Some(version) => *version,
                None => self.version_of(stream_id),
            };
            if let Some(expected) = append.expected_version {
                if expected != current {
                    return Err(RepoError::version_conflict(stream_id, expected, current));
                }
            }

            let stored = append
                .events
                .iter()
                .zip(current + 1..)
                .map(|(event, version)| {
                    StoredEvent::new(stream_id, &append.aggregate_type, version, event, recorded_at)
                })
                .collect::<Result<Vec<_>, _>>()?;
            let version = current + stored.len() as u64;
            staged_versions.insert(stream_id, version);
            staged.push((stored, version));
        }
        Ok(staged)
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        stream_id: &str,
        aggregate_type: &str,
        events: &[DomainEvent],
        expected_version: Option<u64>,
    ) -> Result<u64, RepoError> {
        let batch = [StreamAppend::new(
            stream_id,
            aggregate_type,
            events.to_vec(),
            expected_version,
        )];
        let versions = self.append_all(&batch).await?;
        Ok(versions.last().copied().unwrap_or_default())
    }

    async fn append_all(&self, batch: &[StreamAppend]) -> Result<Vec<u64>, RepoError> {
        let _guard = self.write_lock.lock().await;
        let staged = self.stage(batch)?;

        let mut versions = Vec::with_capacity(staged.len());
        for (append, (stored, version)) in batch.iter().zip(staged) {
            if !stored.is_empty() {
                self.streams
                    .entry(append.stream_id.clone())
                    .or_default()
                    .extend(stored);
                tracing::debug!(
                    stream_id = %append.stream_id,
                    appended = append.events.len(),
                    version,
                    "Events appended"
                );
            }
            versions.push(version);
        }
        Ok(versions)
    }

    async fn get_events(
        &self,
        stream_id: &str,
        from_version: Option<u64>,
    ) -> Result<Vec<StoredEvent>, RepoError> {
        let from = from_version.unwrap_or(1);
        Ok(self
            .streams
            .get(stream_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|event| event.version >= from)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn stream_version(&self, stream_id: &str) -> Result<u64, RepoError> {
        Ok(self.version_of(stream_id))
    }
}

// ============================================================================
// Tests
// ============================================================================
