//! At-bat errors.

use dugout_domain::{Base, DomainError, GameId, GameStatus, HalfInning, PlayerId, TeamSide};

use crate::infrastructure::ports::RepoError;

/// Broad category of a rejected at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtBatErrorKind {
    /// The game or inning is not in a state that accepts at-bats
    State,
    /// The batter may not bat now
    Eligibility,
    /// Runner movement does not fit the bases
    Advancement,
}

/// Why the coordinator rejected an at-bat.
///
/// Returned inside a failed [`super::AtBatOutcome`]; never leaves the
/// coordinator as a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtBatError {
    #[error("Game {game_id} is {status}, not in progress")]
    GameNotInProgress { game_id: GameId, status: GameStatus },

    #[error("{aggregate} does not belong to game {game_id}")]
    ForeignAggregate {
        aggregate: &'static str,
        game_id: GameId,
    },

    #[error("Inning play is at the {inning_play} but the game is at the {game}")]
    InningOutOfSync {
        game: HalfInning,
        inning_play: HalfInning,
    },

    #[error("Inning play for game {game_id} is concluded")]
    InningPlayConcluded { game_id: GameId },

    #[error("Player {batter_id} is not an eligible batter for the {side} team")]
    IneligibleBatter { batter_id: PlayerId, side: TeamSide },

    #[error("Runner {runner_id} is not on {base}")]
    RunnerNotOnBase { runner_id: PlayerId, base: Base },

    #[error("Invalid runner advancement: {0}")]
    InvalidAdvancement(DomainError),

    #[error("Game transition rejected: {0}")]
    GameTransition(DomainError),
}

impl AtBatError {
    pub fn kind(&self) -> AtBatErrorKind {
        match self {
            Self::GameNotInProgress { .. }
            | Self::ForeignAggregate { .. }
            | Self::InningOutOfSync { .. }
            | Self::InningPlayConcluded { .. }
            | Self::GameTransition(_) => AtBatErrorKind::State,
            Self::IneligibleBatter { .. } => AtBatErrorKind::Eligibility,
            Self::RunnerNotOnBase { .. } | Self::InvalidAdvancement(_) => {
                AtBatErrorKind::Advancement
            }
        }
    }
}

/// Errors from the record-at-bat use case.
///
/// A rejected at-bat is not an error here: it comes back as a failed
/// outcome. These cover loading and persisting.
#[derive(Debug, thiserror::Error)]
pub enum RecordAtBatError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error("No inning play for game {0}")]
    InningPlayNotFound(GameId),
    #[error("No {side} lineup for game {game_id}")]
    LineupNotFound { game_id: GameId, side: TeamSide },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
