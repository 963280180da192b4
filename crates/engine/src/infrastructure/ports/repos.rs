//! Repository port traits for aggregate and event storage.

use async_trait::async_trait;
use dugout_domain::{DomainEvent, Game, GameId, InningPlay, TeamLineup, TeamSide};

use super::error::RepoError;
use super::types::{StoredEvent, StreamAppend};

// =============================================================================
// Aggregate Ports (one per aggregate type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError>;
    async fn save(&self, game: &Game) -> Result<(), RepoError>;
}

/// Each game has exactly one inning play, looked up by game.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InningPlayRepo: Send + Sync {
    async fn get_for_game(&self, game_id: GameId) -> Result<Option<InningPlay>, RepoError>;
    async fn save(&self, inning_play: &InningPlay) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineupRepo: Send + Sync {
    async fn get_for_game(
        &self,
        game_id: GameId,
        side: TeamSide,
    ) -> Result<Option<TeamLineup>, RepoError>;
    async fn save(&self, lineup: &TeamLineup) -> Result<(), RepoError>;
}

// =============================================================================
// Event Store
// =============================================================================

/// Append-only event streams, one per aggregate instance.
///
/// Versions count events: an empty stream is at version 0 and the first
/// appended event gets version 1.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to a stream and return the stream's new version.
    ///
    /// With `expected_version` set, the append fails with
    /// [`RepoError::VersionConflict`] unless the stream is at exactly that
    /// version. Appending nothing returns the current version.
    async fn append(
        &self,
        stream_id: &str,
        aggregate_type: &str,
        events: &[DomainEvent],
        expected_version: Option<u64>,
    ) -> Result<u64, RepoError>;

    /// Append to several streams at once and return each stream's new
    /// version, in batch order.
    ///
    /// All or nothing: every expected version is checked before anything is
    /// written, and a failure on any stream leaves every stream untouched.
    async fn append_all(&self, batch: &[StreamAppend]) -> Result<Vec<u64>, RepoError>;

    /// Events of a stream in version order, starting at `from_version`
    /// (inclusive) when given.
    async fn get_events(
        &self,
        stream_id: &str,
        from_version: Option<u64>,
    ) -> Result<Vec<StoredEvent>, RepoError>;

    /// Current version of a stream (0 when it has no events).
    async fn stream_version(&self, stream_id: &str) -> Result<u64, RepoError>;
}
