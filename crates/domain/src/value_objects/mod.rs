//! Value objects - Immutable objects defined by their attributes

mod bases;
mod game_context;
mod game_rules;
mod half_inning;
mod runner_movement;
mod score;

pub use bases::{Base, BasesOccupancy};
pub use game_context::GameContext;
pub use game_rules::{ExtraInningsLimit, GameRules, GameRulesConfig, MercyRuleTier};
pub use half_inning::HalfInning;
pub use runner_movement::{runs_scored, Destination, RunnerMovement};
pub use score::Score;
