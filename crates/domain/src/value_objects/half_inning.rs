//! Position within a game: inning number plus half.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::InningHalf;

/// One half of one inning.
///
/// Ordering follows play: top of the 3rd < bottom of the 3rd < top of the 4th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfInning {
    pub inning: u32,
    pub half: InningHalf,
}

impl HalfInning {
    /// Top of the first.
    pub fn opening() -> Self {
        Self::top(1)
    }

    pub fn top(inning: u32) -> Self {
        Self {
            inning,
            half: InningHalf::Top,
        }
    }

    pub fn bottom(inning: u32) -> Self {
        Self {
            inning,
            half: InningHalf::Bottom,
        }
    }

    /// The half that follows: top goes to bottom of the same inning, bottom
    /// goes to the top of the next.
    pub fn next(self) -> Self {
        match self.half {
            InningHalf::Top => Self::bottom(self.inning),
            InningHalf::Bottom => Self::top(self.inning + 1),
        }
    }

    pub fn is_top(self) -> bool {
        self.half.is_top()
    }

    pub fn is_bottom(self) -> bool {
        self.half.is_bottom()
    }
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.half, self.inning)
    }
}
