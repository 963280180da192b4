//! Game aggregate - score, status, and inning pointer for one game
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Valid by construction**: `new()` takes a validated [`GameRules`]
//! - **Events from mutations**: every mutator returns a [`GameEvent`]
//!
//! The inning pointer mirrors the inning play aggregate. It only advances when
//! a half-inning ends and the game continues; a completed game keeps the
//! position where it ended.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::GameEvent;
use crate::types::{CompletionReason, GameStatus, TeamSide};
use crate::value_objects::{GameRules, HalfInning, Score};
use crate::GameId;

/// A softball game between two teams.
///
/// # Invariants
///
/// - Runs never decrease
/// - Status only moves forward (`NotStarted -> InProgress -> Completed`)
/// - `completion_reason` is set if and only if the game is completed
///
/// # Example
///
/// ```
/// use dugout_domain::aggregates::Game;
/// use dugout_domain::{GameRules, GameStatus, TeamSide};
///
/// let mut game = Game::new("Mudcats", "Riverhawks", GameRules::recreational());
/// game.start().unwrap();
/// game.add_runs(TeamSide::Away, 2).unwrap();
///
/// assert_eq!(game.status(), GameStatus::InProgress);
/// assert_eq!(game.score().away, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameWire", into = "GameWire")]
pub struct Game {
    id: GameId,
    home_team: String,
    away_team: String,
    status: GameStatus,
    score: Score,
    current: HalfInning,
    rules: GameRules,
    completion_reason: Option<CompletionReason>,
}

impl Game {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a game that has not started, positioned at the top of the first.
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, rules: GameRules) -> Self {
        Self {
            id: GameId::new(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            status: GameStatus::NotStarted,
            score: Score::default(),
            current: HalfInning::opening(),
            rules,
            completion_reason: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[inline]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn runs_for(&self, side: TeamSide) -> u32 {
        self.score.runs_for(side)
    }

    #[inline]
    pub fn current(&self) -> HalfInning {
        self.current
    }

    #[inline]
    pub fn current_inning(&self) -> u32 {
        self.current.inning
    }

    #[inline]
    pub fn is_top_half(&self) -> bool {
        self.current.is_top()
    }

    #[inline]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    pub fn completion_reason(&self) -> Option<CompletionReason> {
        self.completion_reason
    }

    /// The side currently at the plate.
    pub fn batting_side(&self) -> TeamSide {
        TeamSide::batting_in(self.current.half)
    }

    // =========================================================================
    // Builder Methods (for loading from storage)
    // =========================================================================

    /// Set the game's ID (used when loading from storage).
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    /// Restore status, score, and position (used when loading from storage).
    ///
    /// # Errors
    ///
    /// Rejects inning 0 and a completed game without a reason (or a reason on
    /// a game that is not completed).
    pub fn with_state(
        mut self,
        status: GameStatus,
        score: Score,
        current: HalfInning,
        completion_reason: Option<CompletionReason>,
    ) -> Result<Self, DomainError> {
        if current.inning == 0 {
            return Err(DomainError::validation("Inning numbers start at 1"));
        }
        if status.is_terminal() != completion_reason.is_some() {
            return Err(DomainError::validation(format!(
                "Game status {} is inconsistent with completion reason {:?}",
                status, completion_reason
            )));
        }
        self.status = status;
        self.score = score;
        self.current = current;
        self.completion_reason = completion_reason;
        Ok(self)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Begin play.
    pub fn start(&mut self) -> Result<GameEvent, DomainError> {
        self.transition(GameStatus::InProgress)?;
        Ok(GameEvent::Started { game_id: self.id })
    }

    /// Add runs to one side's total.
    pub fn add_runs(&mut self, side: TeamSide, runs: u32) -> Result<GameEvent, DomainError> {
        self.require_in_progress("add runs")?;
        self.score = self.score.with_runs(side, runs);
        Ok(GameEvent::RunsScored {
            game_id: self.id,
            side,
            runs,
            score: self.score,
        })
    }

    /// Move the inning pointer forward to `to`.
    pub fn advance_to(&mut self, to: HalfInning) -> Result<GameEvent, DomainError> {
        self.require_in_progress("advance the inning")?;
        if to <= self.current {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot move inning pointer from {} back to {}",
                self.current, to
            )));
        }
        let from = std::mem::replace(&mut self.current, to);
        Ok(GameEvent::InningAdvanced {
            game_id: self.id,
            from,
            to,
        })
    }

    /// End the game for the given reason. The inning pointer stays put.
    pub fn complete(&mut self, reason: CompletionReason) -> Result<GameEvent, DomainError> {
        self.transition(GameStatus::Completed)?;
        self.completion_reason = Some(reason);
        Ok(GameEvent::Completed {
            game_id: self.id,
            reason,
            final_score: self.score,
            ended_in: self.current,
        })
    }

    fn transition(&mut self, next: GameStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_state_transition(format!(
                "Game {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    fn require_in_progress(&self, action: &str) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot {} while game is {}",
                action, self.status
            )));
        }
        Ok(())
    }
}

/// Serialized form of [`Game`]; restored through [`Game::with_state`].
#[derive(Serialize, Deserialize)]
struct GameWire {
    id: GameId,
    home_team: String,
    away_team: String,
    status: GameStatus,
    score: Score,
    current: HalfInning,
    rules: GameRules,
    completion_reason: Option<CompletionReason>,
}

impl TryFrom<GameWire> for Game {
    type Error = DomainError;

    fn try_from(wire: GameWire) -> Result<Self, Self::Error> {
        Game::new(wire.home_team, wire.away_team, wire.rules)
            .with_id(wire.id)
            .with_state(wire.status, wire.score, wire.current, wire.completion_reason)
    }
}

impl From<Game> for GameWire {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            home_team: game.home_team,
            away_team: game.away_team,
            status: game.status,
            score: game.score,
            current: game.current,
            rules: game.rules,
            completion_reason: game.completion_reason,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
