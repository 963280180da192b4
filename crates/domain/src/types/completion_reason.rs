//! Why a game ended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule that ended a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionReason {
    /// Scheduled innings played out, or an extra-innings limit reached
    Regulation,
    /// Home team took the lead in the bottom of the final or an extra inning
    Walkoff,
    /// Run differential met a mercy tier after a completed inning
    MercyRule,
}

impl CompletionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionReason::Regulation => "REGULATION",
            CompletionReason::Walkoff => "WALKOFF",
            CompletionReason::MercyRule => "MERCY_RULE",
        }
    }
}

impl fmt::Display for CompletionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
