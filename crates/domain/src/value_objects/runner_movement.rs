//! Proposed runner movements for a single play.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bases::Base;
use crate::PlayerId;

/// Where a runner ends up after a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Destination {
    Base(Base),
    /// Crossed the plate: one run
    Home,
    /// Put out on the play
    Out,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Base(base) => write!(f, "{}", base),
            Destination::Home => f.write_str("HOME"),
            Destination::Out => f.write_str("OUT"),
        }
    }
}

/// One runner's movement on a play.
///
/// `from == None` describes the batter leaving home plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerMovement {
    pub runner_id: PlayerId,
    pub from: Option<Base>,
    pub to: Destination,
}

impl RunnerMovement {
    /// The batter's movement out of the box.
    pub fn batter(runner_id: PlayerId, to: Destination) -> Self {
        Self {
            runner_id,
            from: None,
            to,
        }
    }

    /// A runner already on base.
    pub fn runner(runner_id: PlayerId, from: Base, to: Destination) -> Self {
        Self {
            runner_id,
            from: Some(from),
            to,
        }
    }

    pub fn is_batter(&self) -> bool {
        self.from.is_none()
    }

    pub fn is_run(&self) -> bool {
        matches!(self.to, Destination::Home)
    }

    pub fn is_out(&self) -> bool {
        matches!(self.to, Destination::Out)
    }
}

/// Runs scored by a movement list: one per movement ending at home.
pub fn runs_scored(movements: &[RunnerMovement]) -> u32 {
    movements.iter().filter(|m| m.is_run()).count() as u32
}
