//! Game context handed to the inning aggregate with each at-bat.

use serde::{Deserialize, Serialize};

use super::half_inning::HalfInning;

/// Score snapshot the inning aggregate needs to recognise a walk-off on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameContext {
    pub home_score: u32,
    pub away_score: u32,
    pub total_innings: u32,
    /// Runs the current play is about to score
    pub runs_scoring: u32,
}

impl GameContext {
    /// Returns true if the scoring runs end the game during `half`: home bats
    /// in the final or an extra inning and finishes the play ahead.
    pub fn is_walk_off(&self, half: HalfInning) -> bool {
        half.is_bottom()
            && half.inning >= self.total_innings
            && self.runs_scoring > 0
            && self.home_score + self.runs_scoring > self.away_score
    }
}
