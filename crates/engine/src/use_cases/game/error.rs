//! Game lifecycle errors.

use dugout_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors from starting a game.
#[derive(Debug, thiserror::Error)]
pub enum StartGameError {
    /// A lineup or the game itself failed validation
    #[error("Invalid game setup: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
