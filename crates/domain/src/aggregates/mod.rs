//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Concern | Rustic Equivalent |
//! |---------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | `&mut self` mutators that fail without side effects |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Domain Events | Return enums from mutations |
//!
//! All three aggregates use the same discipline: encapsulated state changed
//! only through `&mut self` methods. Callers that need all-or-nothing updates
//! across aggregates work on clones and keep them only on success.

pub mod game;
pub mod inning_play;
pub mod lineup;

pub use game::Game;
pub use inning_play::{AtBatApplied, AtBatInput, InningPlay};
pub use lineup::{BattingSlot, TeamLineup};
