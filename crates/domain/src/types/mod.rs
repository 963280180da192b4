//! # Dugout Domain Types
//!
//! Shared vocabulary for the scorebook: lifecycle status, team sides, inning
//! halves, plate-appearance results, and completion reasons.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Stable wire names** - SCREAMING_SNAKE_CASE via serde, matching `Display`
//! 3. **Serializable** - All types derive Serialize/Deserialize

mod at_bat_result;
pub use at_bat_result::AtBatResultType;

mod completion_reason;
pub use completion_reason::CompletionReason;

mod game_status;
pub use game_status::GameStatus;

mod team_side;
pub use team_side::{InningHalf, TeamSide};
