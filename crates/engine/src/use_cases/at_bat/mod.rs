//! At-bat use cases.
//!
//! The [`AtBatCoordinator`] is the pure core: it turns one plate appearance
//! into consistent updates of the game and inning play. [`RecordAtBat`] wraps
//! it with loading, event append, and saving.

mod advancement;
mod completion;
mod coordinator;
mod error;
mod record_at_bat;
mod types;

pub use advancement::automatic_movements;
pub use completion::{evaluate as evaluate_completion, PlayResult};
pub use coordinator::AtBatCoordinator;
pub use error::{AtBatError, AtBatErrorKind, RecordAtBatError};
pub use record_at_bat::RecordAtBat;
pub use types::{AtBatOutcome, InningTransition, RecordAtBatInput};
