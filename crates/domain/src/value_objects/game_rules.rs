//! Game rules policy
//!
//! # Architectural Note
//!
//! `GameRules` is the single configuration object a game carries for its whole
//! life. It is validated once at construction and never mutated; any invalid
//! combination fails immediately so a partially-valid policy is never
//! observable. Deserialization goes through the same validation via
//! `#[serde(try_from = "GameRulesConfig")]`, which makes the JSON shape of
//! [`GameRulesConfig`] the configuration-file contract.
//!
//! # Mercy Rule Tiers
//!
//! A tier `{ differential, after_inning }` fires once `current_inning >=
//! after_inning` and the run differential is at least `differential`. Tiers are
//! evaluated as a disjunction: declaration order only matters for validity
//! (strictly increasing `after_inning`), never for the evaluation outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Upper bound for any inning-valued setting.
const MAX_INNINGS: u32 = 99;
/// Upper bound for a mercy differential.
const MAX_DIFFERENTIAL: u32 = 100;
/// Upper bound for roster size.
const MAX_PLAYERS_PER_TEAM: u32 = 50;
/// Upper bound for a time limit (ten hours).
const MAX_TIME_LIMIT_MINUTES: u32 = 600;

// ============================================================================
// Mercy Rule Tier
// ============================================================================

/// One (differential, after-inning) threshold of a multi-stage mercy rule.
///
/// # Examples
///
/// ```
/// use dugout_domain::value_objects::MercyRuleTier;
///
/// let tier = MercyRuleTier::new(10, 4).unwrap();
/// assert!(tier.applies(10, 4));
/// assert!(!tier.applies(9, 4));
/// assert!(!tier.applies(10, 3));
///
/// assert!(MercyRuleTier::new(0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MercyRuleTierWire", into = "MercyRuleTierWire")]
pub struct MercyRuleTier {
    differential: u32,
    after_inning: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MercyRuleTierWire {
    differential: u32,
    after_inning: u32,
}

impl MercyRuleTier {
    /// Create a validated tier.
    ///
    /// # Errors
    ///
    /// - `differential` must be in `1..=100`
    /// - `after_inning` must be in `1..=99`
    pub fn new(differential: u32, after_inning: u32) -> Result<Self, DomainError> {
        if !(1..=MAX_DIFFERENTIAL).contains(&differential) {
            return Err(DomainError::validation(format!(
                "Mercy rule differential must be between 1 and {}, got {}",
                MAX_DIFFERENTIAL, differential
            )));
        }
        if !(1..=MAX_INNINGS).contains(&after_inning) {
            return Err(DomainError::validation(format!(
                "Mercy rule after_inning must be between 1 and {}, got {}",
                MAX_INNINGS, after_inning
            )));
        }
        Ok(Self {
            differential,
            after_inning,
        })
    }

    #[inline]
    pub fn differential(&self) -> u32 {
        self.differential
    }

    #[inline]
    pub fn after_inning(&self) -> u32 {
        self.after_inning
    }

    /// Returns true if this tier ends the game at the given differential and inning.
    pub fn applies(&self, differential: u32, current_inning: u32) -> bool {
        current_inning >= self.after_inning && differential >= self.differential
    }
}

impl TryFrom<MercyRuleTierWire> for MercyRuleTier {
    type Error = DomainError;

    fn try_from(wire: MercyRuleTierWire) -> Result<Self, Self::Error> {
        MercyRuleTier::new(wire.differential, wire.after_inning)
    }
}

impl From<MercyRuleTier> for MercyRuleTierWire {
    fn from(tier: MercyRuleTier) -> Self {
        Self {
            differential: tier.differential,
            after_inning: tier.after_inning,
        }
    }
}

// ============================================================================
// Extra Innings Limit
// ============================================================================

/// How many innings may be played past regulation.
///
/// Serialized as an optional number: `null` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum ExtraInningsLimit {
    Limited(u32),
    #[default]
    Unlimited,
}

impl ExtraInningsLimit {
    pub fn is_bounded(self) -> bool {
        matches!(self, ExtraInningsLimit::Limited(_))
    }

    /// Returns true once `extra_played` innings meet a bounded limit.
    pub fn is_exhausted(self, extra_played: u32) -> bool {
        match self {
            ExtraInningsLimit::Limited(max) => extra_played >= max,
            ExtraInningsLimit::Unlimited => false,
        }
    }
}

impl From<Option<u32>> for ExtraInningsLimit {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(max) => ExtraInningsLimit::Limited(max),
            None => ExtraInningsLimit::Unlimited,
        }
    }
}

impl From<ExtraInningsLimit> for Option<u32> {
    fn from(value: ExtraInningsLimit) -> Self {
        match value {
            ExtraInningsLimit::Limited(max) => Some(max),
            ExtraInningsLimit::Unlimited => None,
        }
    }
}

impl fmt::Display for ExtraInningsLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraInningsLimit::Limited(max) => write!(f, "{}", max),
            ExtraInningsLimit::Unlimited => f.write_str("unlimited"),
        }
    }
}

// ============================================================================
// Rules Configuration (unvalidated input)
// ============================================================================

/// Unvalidated rules input, as read from configuration files or requests.
///
/// Convert with [`GameRules::new`]; every field is checked there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRulesConfig {
    pub total_innings: u32,
    #[serde(default = "default_allow_re_entry")]
    pub allow_re_entry: bool,
    #[serde(default)]
    pub mercy_rule_enabled: bool,
    #[serde(default)]
    pub mercy_rule_tiers: Vec<MercyRuleTier>,
    #[serde(default)]
    pub max_extra_innings: ExtraInningsLimit,
    #[serde(default)]
    pub allow_tie_games: bool,
    #[serde(default = "default_max_players_per_team")]
    pub max_players_per_team: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
}

fn default_allow_re_entry() -> bool {
    true
}

fn default_max_players_per_team() -> u32 {
    25
}

impl Default for GameRulesConfig {
    fn default() -> Self {
        GameRules::recreational().into()
    }
}

// ============================================================================
// Game Rules
// ============================================================================

/// Immutable, validated rules policy attached to a game.
///
/// # Invariants
///
/// - `total_innings >= 1`
/// - Mercy tiers have strictly increasing `after_inning` (no duplicates)
/// - `allow_tie_games` requires a bounded `max_extra_innings`
///
/// # Examples
///
/// ```
/// use dugout_domain::value_objects::{ExtraInningsLimit, GameRules, GameRulesConfig, MercyRuleTier};
///
/// let rules = GameRules::new(GameRulesConfig {
///     total_innings: 7,
///     mercy_rule_enabled: true,
///     mercy_rule_tiers: vec![
///         MercyRuleTier::new(10, 4).unwrap(),
///         MercyRuleTier::new(7, 5).unwrap(),
///     ],
///     max_extra_innings: ExtraInningsLimit::Limited(2),
///     allow_tie_games: true,
///     ..GameRulesConfig::default()
/// })
/// .unwrap();
///
/// assert!(rules.is_mercy_rule(12, 2, 4));
/// assert!(!rules.is_mercy_rule(9, 0, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRulesConfig", into = "GameRulesConfig")]
pub struct GameRules {
    total_innings: u32,
    allow_re_entry: bool,
    mercy_rule_enabled: bool,
    mercy_rule_tiers: Vec<MercyRuleTier>,
    max_extra_innings: ExtraInningsLimit,
    allow_tie_games: bool,
    max_players_per_team: u32,
    time_limit_minutes: Option<u32>,
}

impl GameRules {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Validate a configuration into a rules policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first offending field.
    pub fn new(config: GameRulesConfig) -> Result<Self, DomainError> {
        if !(1..=MAX_INNINGS).contains(&config.total_innings) {
            return Err(DomainError::validation(format!(
                "total_innings must be between 1 and {}, got {}",
                MAX_INNINGS, config.total_innings
            )));
        }

        for pair in config.mercy_rule_tiers.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if later.after_inning() == earlier.after_inning() {
                return Err(DomainError::validation(format!(
                    "Duplicate mercy rule tier for inning {}",
                    later.after_inning()
                )));
            }
            if later.after_inning() < earlier.after_inning() {
                return Err(DomainError::validation(format!(
                    "Mercy rule tiers must be in increasing inning order: inning {} follows inning {}",
                    later.after_inning(),
                    earlier.after_inning()
                )));
            }
        }

        if let ExtraInningsLimit::Limited(max) = config.max_extra_innings {
            if max > MAX_INNINGS {
                return Err(DomainError::validation(format!(
                    "max_extra_innings must be at most {}, got {}",
                    MAX_INNINGS, max
                )));
            }
        }

        if config.allow_tie_games && !config.max_extra_innings.is_bounded() {
            return Err(DomainError::validation(
                "allow_tie_games requires a bounded max_extra_innings",
            ));
        }

        if !(1..=MAX_PLAYERS_PER_TEAM).contains(&config.max_players_per_team) {
            return Err(DomainError::validation(format!(
                "max_players_per_team must be between 1 and {}, got {}",
                MAX_PLAYERS_PER_TEAM, config.max_players_per_team
            )));
        }

        if let Some(minutes) = config.time_limit_minutes {
            if !(1..=MAX_TIME_LIMIT_MINUTES).contains(&minutes) {
                return Err(DomainError::validation(format!(
                    "time_limit_minutes must be between 1 and {}, got {}",
                    MAX_TIME_LIMIT_MINUTES, minutes
                )));
            }
        }

        Ok(Self {
            total_innings: config.total_innings,
            allow_re_entry: config.allow_re_entry,
            mercy_rule_enabled: config.mercy_rule_enabled,
            mercy_rule_tiers: config.mercy_rule_tiers,
            max_extra_innings: config.max_extra_innings,
            allow_tie_games: config.allow_tie_games,
            max_players_per_team: config.max_players_per_team,
            time_limit_minutes: config.time_limit_minutes,
        })
    }

    /// Recreational league defaults: seven innings, three mercy tiers, no
    /// cap on extra innings.
    pub fn recreational() -> Self {
        Self {
            total_innings: 7,
            allow_re_entry: true,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![
                MercyRuleTier {
                    differential: 20,
                    after_inning: 3,
                },
                MercyRuleTier {
                    differential: 15,
                    after_inning: 4,
                },
                MercyRuleTier {
                    differential: 10,
                    after_inning: 5,
                },
            ],
            max_extra_innings: ExtraInningsLimit::Unlimited,
            allow_tie_games: false,
            max_players_per_team: 25,
            time_limit_minutes: None,
        }
    }

    /// Tournament play: tighter mercy tiers, one extra inning, then a tie stands.
    pub fn tournament() -> Self {
        Self {
            total_innings: 7,
            allow_re_entry: false,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![
                MercyRuleTier {
                    differential: 15,
                    after_inning: 3,
                },
                MercyRuleTier {
                    differential: 10,
                    after_inning: 4,
                },
                MercyRuleTier {
                    differential: 8,
                    after_inning: 5,
                },
            ],
            max_extra_innings: ExtraInningsLimit::Limited(1),
            allow_tie_games: true,
            max_players_per_team: 20,
            time_limit_minutes: Some(75),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn total_innings(&self) -> u32 {
        self.total_innings
    }

    #[inline]
    pub fn allow_re_entry(&self) -> bool {
        self.allow_re_entry
    }

    #[inline]
    pub fn mercy_rule_enabled(&self) -> bool {
        self.mercy_rule_enabled
    }

    #[inline]
    pub fn mercy_rule_tiers(&self) -> &[MercyRuleTier] {
        &self.mercy_rule_tiers
    }

    #[inline]
    pub fn max_extra_innings(&self) -> ExtraInningsLimit {
        self.max_extra_innings
    }

    #[inline]
    pub fn allow_tie_games(&self) -> bool {
        self.allow_tie_games
    }

    #[inline]
    pub fn max_players_per_team(&self) -> u32 {
        self.max_players_per_team
    }

    #[inline]
    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    // =========================================================================
    // Policy Queries
    // =========================================================================

    /// Returns true if any mercy tier is met at the given score and inning.
    ///
    /// Always false when the mercy rule is disabled or no tiers are configured.
    pub fn is_mercy_rule(&self, home_score: u32, away_score: u32, current_inning: u32) -> bool {
        if !self.mercy_rule_enabled {
            return false;
        }
        let differential = home_score.abs_diff(away_score);
        self.mercy_rule_tiers
            .iter()
            .any(|tier| tier.applies(differential, current_inning))
    }

    /// Returns true if `inning` is past the scheduled innings.
    pub fn is_extra_inning(&self, inning: u32) -> bool {
        inning > self.total_innings
    }

    /// Returns true once the extra-innings cap has been reached.
    pub fn extra_innings_exhausted(&self, extra_played: u32) -> bool {
        self.max_extra_innings.is_exhausted(extra_played)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::recreational()
    }
}

impl TryFrom<GameRulesConfig> for GameRules {
    type Error = DomainError;

    fn try_from(config: GameRulesConfig) -> Result<Self, Self::Error> {
        GameRules::new(config)
    }
}

impl From<GameRules> for GameRulesConfig {
    fn from(rules: GameRules) -> Self {
        Self {
            total_innings: rules.total_innings,
            allow_re_entry: rules.allow_re_entry,
            mercy_rule_enabled: rules.mercy_rule_enabled,
            mercy_rule_tiers: rules.mercy_rule_tiers,
            max_extra_innings: rules.max_extra_innings,
            allow_tie_games: rules.allow_tie_games,
            max_players_per_team: rules.max_players_per_team,
            time_limit_minutes: rules.time_limit_minutes,
        }
    }
}
