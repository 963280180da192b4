//! Domain Events
//!
//! Every aggregate mutator returns one of these enums to communicate what
//! happened. The engine collects them per at-bat and appends them to the
//! owning aggregate's event stream.
//!
//! ## Aggregate Mutation Events
//!
//! - [`GameEvent`] - status, score, and inning pointer changes
//! - [`InningEvent`] - at-bats, runner advancement, half-inning transitions
//! - [`LineupEvent`] - substitutions and re-entries

pub mod game_events;
pub mod inning_events;
pub mod lineup_events;

pub use game_events::GameEvent;
pub use inning_events::InningEvent;
pub use lineup_events::LineupEvent;

use serde::{Deserialize, Serialize};

/// Any event emitted by a domain aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainEvent {
    Game(GameEvent),
    Inning(InningEvent),
    Lineup(LineupEvent),
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Game(GameEvent::Started { .. }) => "game_started",
            Self::Game(GameEvent::RunsScored { .. }) => "runs_scored",
            Self::Game(GameEvent::InningAdvanced { .. }) => "inning_advanced",
            Self::Game(GameEvent::Completed { .. }) => "game_completed",
            Self::Inning(InningEvent::AtBatRecorded { .. }) => "at_bat_recorded",
            Self::Inning(InningEvent::RunnersAdvanced { .. }) => "runners_advanced",
            Self::Inning(InningEvent::HalfInningCompleted { .. }) => "half_inning_completed",
            Self::Inning(InningEvent::Concluded { .. }) => "inning_play_concluded",
            Self::Lineup(LineupEvent::PlayerSubstituted { .. }) => "player_substituted",
            Self::Lineup(LineupEvent::PlayerReEntered { .. }) => "player_re_entered",
        }
    }

    /// The aggregate type whose stream this event belongs to.
    pub fn aggregate_type(&self) -> &'static str {
        match self {
            Self::Game(_) => "game",
            Self::Inning(_) => "inning_play",
            Self::Lineup(_) => "lineup",
        }
    }
}

impl From<GameEvent> for DomainEvent {
    fn from(event: GameEvent) -> Self {
        Self::Game(event)
    }
}

impl From<InningEvent> for DomainEvent {
    fn from(event: InningEvent) -> Self {
        Self::Inning(event)
    }
}

impl From<LineupEvent> for DomainEvent {
    fn from(event: LineupEvent) -> Self {
        Self::Lineup(event)
    }
}
