//! Game aggregate mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::types::{CompletionReason, TeamSide};
use crate::value_objects::{HalfInning, Score};
use crate::GameId;

/// What changed on a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    Started {
        game_id: GameId,
    },
    RunsScored {
        game_id: GameId,
        side: TeamSide,
        runs: u32,
        score: Score,
    },
    InningAdvanced {
        game_id: GameId,
        from: HalfInning,
        to: HalfInning,
    },
    Completed {
        game_id: GameId,
        reason: CompletionReason,
        final_score: Score,
        ended_in: HalfInning,
    },
}

impl GameEvent {
    pub fn game_id(&self) -> GameId {
        match self {
            Self::Started { game_id }
            | Self::RunsScored { game_id, .. }
            | Self::InningAdvanced { game_id, .. }
            | Self::Completed { game_id, .. } => *game_id,
        }
    }
}
