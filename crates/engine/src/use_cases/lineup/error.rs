//! Lineup errors.

use dugout_domain::{DomainError, GameId, TeamSide};

use crate::infrastructure::ports::RepoError;

/// Errors from substituting a player.
#[derive(Debug, thiserror::Error)]
pub enum SubstituteError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error("No {side} lineup for game {game_id}")]
    LineupNotFound { game_id: GameId, side: TeamSide },
    #[error("Game {0} is over; the lineup is locked")]
    GameCompleted(GameId),
    /// The lineup refused the change (unknown slot, re-entry rules)
    #[error("Substitution rejected: {0}")]
    Rejected(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
