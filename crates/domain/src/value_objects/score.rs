//! Running score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TeamSide;

/// Runs for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn runs_for(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    /// Absolute run differential.
    pub fn differential(&self) -> u32 {
        self.home.abs_diff(self.away)
    }

    pub fn is_tied(&self) -> bool {
        self.home == self.away
    }

    /// The side ahead, or `None` when tied.
    pub fn leader(&self) -> Option<TeamSide> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn with_runs(self, side: TeamSide, runs: u32) -> Self {
        match side {
            TeamSide::Home => Self {
                home: self.home + runs,
                ..self
            },
            TeamSide::Away => Self {
                away: self.away + runs,
                ..self
            },
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (home-away)", self.home, self.away)
    }
}
