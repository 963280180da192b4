//! Inning play aggregate mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::types::AtBatResultType;
use crate::value_objects::{HalfInning, RunnerMovement};
use crate::{InningPlayId, PlayerId};

/// What changed on an inning play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InningEvent {
    AtBatRecorded {
        inning_play_id: InningPlayId,
        half: HalfInning,
        batter_id: PlayerId,
        batting_slot: u32,
        result: AtBatResultType,
        /// Outs in the half after the play, counting a third out
        outs_after: u8,
        runs_scored: u32,
    },
    RunnersAdvanced {
        inning_play_id: InningPlayId,
        half: HalfInning,
        movements: Vec<RunnerMovement>,
    },
    HalfInningCompleted {
        inning_play_id: InningPlayId,
        completed: HalfInning,
        next: HalfInning,
    },
    Concluded {
        inning_play_id: InningPlayId,
        at: HalfInning,
    },
}
