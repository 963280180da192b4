//! Game lifecycle use cases.

mod error;
mod start_game;

pub use error::StartGameError;
pub use start_game::{StartGame, StartGameInput, StartedGame};
