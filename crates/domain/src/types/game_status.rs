//! Game lifecycle status.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a game is in its lifecycle.
///
/// Transitions only move forward: `NotStarted -> InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Lineups may still change; no at-bats accepted
    #[default]
    NotStarted,
    /// At-bats are being recorded
    InProgress,
    /// Terminal; carries a completion reason on the game aggregate
    Completed,
}

impl GameStatus {
    /// Returns true if `next` is the immediate forward successor of `self`.
    pub fn can_transition_to(self, next: GameStatus) -> bool {
        matches!(
            (self, next),
            (GameStatus::NotStarted, GameStatus::InProgress)
                | (GameStatus::InProgress, GameStatus::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "NOT_STARTED",
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOT_STARTED" => Ok(GameStatus::NotStarted),
            "IN_PROGRESS" => Ok(GameStatus::InProgress),
            "COMPLETED" => Ok(GameStatus::Completed),
            _ => Err(DomainError::parse(format!("Unknown game status: {}", s))),
        }
    }
}
