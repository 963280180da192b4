//! Use cases - one module per area of play.
//!
//! Each use case loads aggregates through the repository ports, applies a
//! domain change, appends the resulting events, and saves.

pub mod at_bat;
pub mod game;
pub mod lineup;

pub use at_bat::{AtBatCoordinator, AtBatOutcome, RecordAtBat, RecordAtBatInput};
pub use game::{StartGame, StartGameInput, StartedGame};
pub use lineup::{SubstitutePlayer, SubstitutionInput};
