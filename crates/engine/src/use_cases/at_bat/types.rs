//! At-bat outcome types.

use dugout_domain::{
    AtBatResultType, CompletionReason, DomainEvent, Game, GameId, InningPlay, PlayerId,
    RunnerMovement,
};

use super::error::AtBatError;

/// Where the inning pointer moved after a half-inning ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InningTransition {
    pub new_inning: u32,
    pub new_top_half: bool,
}

/// Result of one coordinated at-bat.
///
/// On failure every aggregate slot is `None` and the counters are zero; the
/// caller's aggregates were never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct AtBatOutcome {
    pub success: bool,
    pub updated_game: Option<Game>,
    pub updated_inning_play: Option<InningPlay>,
    pub runs_scored: u32,
    pub rbis: u32,
    pub inning_complete: bool,
    pub inning_transition: Option<InningTransition>,
    pub game_complete: bool,
    pub completion_reason: Option<CompletionReason>,
    pub error: Option<AtBatError>,
    /// Events emitted by the aggregates, in the order they happened
    pub events: Vec<DomainEvent>,
}

impl AtBatOutcome {
    pub(crate) fn failure(error: AtBatError) -> Self {
        Self {
            success: false,
            updated_game: None,
            updated_inning_play: None,
            runs_scored: 0,
            rbis: 0,
            inning_complete: false,
            inning_transition: None,
            game_complete: false,
            completion_reason: None,
            error: Some(error),
            events: Vec::new(),
        }
    }

    /// Human-readable reason for a failed outcome.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Input to the record-at-bat use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAtBatInput {
    pub game_id: GameId,
    pub batter_id: PlayerId,
    pub result: AtBatResultType,
    /// Manual runner movements replacing the automatic advancement
    pub runner_overrides: Option<Vec<RunnerMovement>>,
}
