//! Team side and inning half vocabulary.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of an inning is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InningHalf {
    /// Visitors bat
    Top,
    /// Home team bats
    Bottom,
}

impl InningHalf {
    pub fn is_top(self) -> bool {
        matches!(self, InningHalf::Top)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, InningHalf::Bottom)
    }

    pub fn from_is_top(is_top: bool) -> Self {
        if is_top {
            InningHalf::Top
        } else {
            InningHalf::Bottom
        }
    }
}

impl fmt::Display for InningHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InningHalf::Top => f.write_str("top"),
            InningHalf::Bottom => f.write_str("bottom"),
        }
    }
}

/// The two teams in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// The side at the plate during the given half: away bats in the top.
    pub fn batting_in(half: InningHalf) -> Self {
        match half {
            InningHalf::Top => TeamSide::Away,
            InningHalf::Bottom => TeamSide::Home,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamSide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(TeamSide::Home),
            "away" | "visitor" | "visitors" => Ok(TeamSide::Away),
            _ => Err(DomainError::parse(format!("Unknown team side: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn away_bats_in_top_half() {
        assert_eq!(TeamSide::batting_in(InningHalf::Top), TeamSide::Away);
        assert_eq!(TeamSide::batting_in(InningHalf::Bottom), TeamSide::Home);
    }

    #[test]
    fn opponent_flips_side() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
    }

    #[test]
    fn parse_accepts_visitor_alias() {
        assert_eq!("Visitors".parse::<TeamSide>().unwrap(), TeamSide::Away);
        assert!("neutral".parse::<TeamSide>().is_err());
    }

    #[test]
    fn top_half_orders_before_bottom() {
        assert!(InningHalf::Top < InningHalf::Bottom);
    }
}
