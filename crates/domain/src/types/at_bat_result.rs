//! Plate-appearance result vocabulary.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recorded outcome of one plate appearance.
///
/// Only the hit types, walks, and sacrifice flies move runners on their own;
/// every other result relies on explicit runner movements from the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AtBatResultType {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    Strikeout,
    GroundOut,
    FlyOut,
    Error,
    FieldersChoice,
    SacrificeFly,
    DoublePlay,
    TriplePlay,
}

impl AtBatResultType {
    /// All result types, in scorebook order.
    pub fn all() -> &'static [AtBatResultType] {
        &[
            AtBatResultType::Single,
            AtBatResultType::Double,
            AtBatResultType::Triple,
            AtBatResultType::HomeRun,
            AtBatResultType::Walk,
            AtBatResultType::Strikeout,
            AtBatResultType::GroundOut,
            AtBatResultType::FlyOut,
            AtBatResultType::Error,
            AtBatResultType::FieldersChoice,
            AtBatResultType::SacrificeFly,
            AtBatResultType::DoublePlay,
            AtBatResultType::TriplePlay,
        ]
    }

    /// Returns true for base hits (single through home run).
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AtBatResultType::Single
                | AtBatResultType::Double
                | AtBatResultType::Triple
                | AtBatResultType::HomeRun
        )
    }

    /// Outs the result itself records, before any runner thrown out on the play.
    pub fn outs_recorded(self) -> u8 {
        match self {
            AtBatResultType::Strikeout
            | AtBatResultType::GroundOut
            | AtBatResultType::FlyOut
            | AtBatResultType::SacrificeFly
            | AtBatResultType::FieldersChoice => 1,
            AtBatResultType::DoublePlay => 2,
            AtBatResultType::TriplePlay => 3,
            AtBatResultType::Single
            | AtBatResultType::Double
            | AtBatResultType::Triple
            | AtBatResultType::HomeRun
            | AtBatResultType::Walk
            | AtBatResultType::Error => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AtBatResultType::Single => "SINGLE",
            AtBatResultType::Double => "DOUBLE",
            AtBatResultType::Triple => "TRIPLE",
            AtBatResultType::HomeRun => "HOME_RUN",
            AtBatResultType::Walk => "WALK",
            AtBatResultType::Strikeout => "STRIKEOUT",
            AtBatResultType::GroundOut => "GROUND_OUT",
            AtBatResultType::FlyOut => "FLY_OUT",
            AtBatResultType::Error => "ERROR",
            AtBatResultType::FieldersChoice => "FIELDERS_CHOICE",
            AtBatResultType::SacrificeFly => "SACRIFICE_FLY",
            AtBatResultType::DoublePlay => "DOUBLE_PLAY",
            AtBatResultType::TriplePlay => "TRIPLE_PLAY",
        }
    }
}

impl fmt::Display for AtBatResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtBatResultType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        AtBatResultType::all()
            .iter()
            .copied()
            .find(|result| result.as_str() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown at-bat result: {}", s)))
    }
}
