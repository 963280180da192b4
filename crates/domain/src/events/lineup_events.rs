//! Lineup aggregate mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::{LineupId, PlayerId};

/// What changed in a batting lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineupEvent {
    PlayerSubstituted {
        lineup_id: LineupId,
        slot: u32,
        outgoing: PlayerId,
        incoming: PlayerId,
    },
    /// A starter returned to their original slot
    PlayerReEntered {
        lineup_id: LineupId,
        slot: u32,
        outgoing: PlayerId,
        player: PlayerId,
    },
}
