//! Bases and base occupancy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PlayerId;

/// A base a runner can occupy. Home plate is not a base here; reaching it is a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// Bases in running order.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// The next base in running order; `None` after third (the runner would score).
    pub fn next(self) -> Option<Base> {
        match self {
            Base::First => Some(Base::Second),
            Base::Second => Some(Base::Third),
            Base::Third => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::First => f.write_str("FIRST"),
            Base::Second => f.write_str("SECOND"),
            Base::Third => f.write_str("THIRD"),
        }
    }
}

/// Which runner, if any, stands on each base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasesOccupancy {
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    third: Option<PlayerId>,
}

impl BasesOccupancy {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bases loaded with the given runners.
    pub fn loaded(first: PlayerId, second: PlayerId, third: PlayerId) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            third: Some(third),
        }
    }

    pub fn runner_on(&self, base: Base) -> Option<PlayerId> {
        match base {
            Base::First => self.first,
            Base::Second => self.second,
            Base::Third => self.third,
        }
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.runner_on(base).is_some()
    }

    /// Occupied bases with their runners, ordered first to third.
    pub fn occupied(&self) -> impl Iterator<Item = (Base, PlayerId)> + '_ {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.runner_on(base).map(|runner| (base, runner)))
    }

    pub fn runner_count(&self) -> u32 {
        self.occupied().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    pub fn is_loaded(&self) -> bool {
        self.runner_count() == 3
    }

    /// The base the given runner stands on, if any.
    pub fn position_of(&self, runner: PlayerId) -> Option<Base> {
        self.occupied()
            .find(|(_, occupant)| *occupant == runner)
            .map(|(base, _)| base)
    }

    /// Put a runner on a base (or clear it with `None`), returning whoever was there.
    pub fn place(&mut self, base: Base, runner: Option<PlayerId>) -> Option<PlayerId> {
        let slot = match base {
            Base::First => &mut self.first,
            Base::Second => &mut self.second,
            Base::Third => &mut self.third,
        };
        std::mem::replace(slot, runner)
    }

    pub fn clear(&mut self, base: Base) -> Option<PlayerId> {
        self.place(base, None)
    }

    pub fn clear_all(&mut self) {
        *self = Self::empty();
    }
}
