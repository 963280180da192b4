//! Dugout domain: softball game aggregates, rules policy, and scoring.
//!
//! Pure types and state transitions with no I/O. The `dugout-engine` crate
//! coordinates these aggregates per at-bat and handles persistence.

extern crate self as dugout_domain;

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod scoring;
pub mod types;
pub mod value_objects;

pub use aggregates::{AtBatApplied, AtBatInput, BattingSlot, Game, InningPlay, TeamLineup};

pub use error::DomainError;
pub use events::{DomainEvent, GameEvent, InningEvent, LineupEvent};

// Re-export ID types
pub use ids::{GameId, InningPlayId, LineupId, PlayerId};

pub use scoring::rbi_for;

pub use types::{AtBatResultType, CompletionReason, GameStatus, InningHalf, TeamSide};

pub use value_objects::{
    runs_scored, Base, BasesOccupancy, Destination, ExtraInningsLimit, GameContext, GameRules,
    GameRulesConfig, HalfInning, MercyRuleTier, RunnerMovement, Score,
};
