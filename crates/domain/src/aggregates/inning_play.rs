//! InningPlay aggregate - outs, baserunners, and batting order progress
//!
//! # Half-Inning Transitions
//!
//! Reaching three outs is a single atomic transition: bases clear, outs reset
//! to zero, and the position moves to the next half. No three-out state is
//! ever observable. Instead of leaving callers to reverse-engineer which half
//! just ended, [`AtBatApplied::half_inning_completed`] names it explicitly.
//!
//! # Runner Advancement
//!
//! The aggregate does not derive advancement from result types. Callers pass
//! precomputed movements (`AtBatInput::movements`); `None` means no runner
//! moves. Movements are validated against the current bases and applied all
//! or nothing.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::InningEvent;
use crate::types::{AtBatResultType, TeamSide};
use crate::value_objects::{
    runs_scored, Base, BasesOccupancy, Destination, GameContext, HalfInning, RunnerMovement,
};
use crate::{GameId, InningPlayId, PlayerId};

const OUTS_PER_HALF: u8 = 3;

/// Everything the aggregate needs to record one at-bat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtBatInput {
    pub batter_id: PlayerId,
    /// 1-based slot the batter occupies in their lineup
    pub batting_slot: u32,
    pub lineup_size: u32,
    pub result: AtBatResultType,
    pub context: GameContext,
    /// Precomputed runner movements, batter included; `None` moves nobody
    pub movements: Option<Vec<RunnerMovement>>,
}

/// What recording an at-bat did to the inning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtBatApplied {
    /// The half the at-bat was played in
    pub half: HalfInning,
    pub runs_scored: u32,
    pub outs_on_play: u8,
    /// Set when the play made the third out; names the half that ended
    pub half_inning_completed: Option<HalfInning>,
    /// The play ended the game in the home half of a final or extra inning
    pub walk_off: bool,
    pub events: Vec<InningEvent>,
}

/// Effect of applying a set of movements plus outs.
struct PlayEffect {
    runs: u32,
    outs_on_play: u8,
    outs_after: u8,
    bases: BasesOccupancy,
}

/// Progress through the innings of one game.
///
/// # Invariants
///
/// - `outs` is always in `0..=2` between transitions
/// - A runner occupies at most one base
/// - Once concluded, no further at-bats are accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InningPlayWire", into = "InningPlayWire")]
pub struct InningPlay {
    id: InningPlayId,
    game_id: GameId,
    current: HalfInning,
    outs: u8,
    bases: BasesOccupancy,
    away_next_slot: u32,
    home_next_slot: u32,
    concluded: bool,
}

impl InningPlay {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Top of the first, nobody out, bases empty, both lineups leading off.
    pub fn new(game_id: GameId) -> Self {
        Self {
            id: InningPlayId::new(),
            game_id,
            current: HalfInning::opening(),
            outs: 0,
            bases: BasesOccupancy::empty(),
            away_next_slot: 1,
            home_next_slot: 1,
            concluded: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> InningPlayId {
        self.id
    }

    #[inline]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[inline]
    pub fn current(&self) -> HalfInning {
        self.current
    }

    #[inline]
    pub fn inning(&self) -> u32 {
        self.current.inning
    }

    #[inline]
    pub fn is_top_half(&self) -> bool {
        self.current.is_top()
    }

    #[inline]
    pub fn outs(&self) -> u8 {
        self.outs
    }

    #[inline]
    pub fn bases(&self) -> &BasesOccupancy {
        &self.bases
    }

    #[inline]
    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    pub fn batting_side(&self) -> TeamSide {
        TeamSide::batting_in(self.current.half)
    }

    /// The slot due up next for a side.
    pub fn next_slot(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Away => self.away_next_slot,
            TeamSide::Home => self.home_next_slot,
        }
    }

    // =========================================================================
    // Builder Methods (for loading from storage)
    // =========================================================================

    /// Set the inning play's ID (used when loading from storage).
    pub fn with_id(mut self, id: InningPlayId) -> Self {
        self.id = id;
        self
    }

    /// Position the play at a half-inning with nobody on and nobody out.
    pub fn with_position(mut self, current: HalfInning) -> Result<Self, DomainError> {
        if current.inning == 0 {
            return Err(DomainError::validation("Inning numbers start at 1"));
        }
        self.current = current;
        self.outs = 0;
        self.bases.clear_all();
        Ok(self)
    }

    // =========================================================================
    // Test Seams
    // =========================================================================

    /// Put a runner on (or clear) a base directly.
    pub fn set_runner(&mut self, base: Base, runner: Option<PlayerId>) {
        if let Some(runner) = runner {
            if let Some(existing) = self.bases.position_of(runner) {
                self.bases.clear(existing);
            }
        }
        self.bases.place(base, runner);
    }

    /// Set the out count directly. Three outs is not a resting state.
    pub fn set_outs(&mut self, outs: u8) -> Result<(), DomainError> {
        if outs >= OUTS_PER_HALF {
            return Err(DomainError::validation(format!(
                "Outs must be between 0 and {}, got {}",
                OUTS_PER_HALF - 1,
                outs
            )));
        }
        self.outs = outs;
        Ok(())
    }

    /// Set the slot due up next for a side.
    pub fn set_next_slot(&mut self, side: TeamSide, slot: u32) -> Result<(), DomainError> {
        if slot == 0 {
            return Err(DomainError::validation("Batting slots start at 1"));
        }
        match side {
            TeamSide::Away => self.away_next_slot = slot,
            TeamSide::Home => self.home_next_slot = slot,
        }
        Ok(())
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Record one plate appearance.
    ///
    /// Applies the precomputed movements, adds the play's outs, advances the
    /// batting side's slot, and performs the half-inning transition on the
    /// third out.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the play is concluded, the slot is
    /// outside the lineup, or a movement does not fit the current bases.
    pub fn record_at_bat(&mut self, input: AtBatInput) -> Result<AtBatApplied, DomainError> {
        self.require_open()?;
        if input.lineup_size == 0 || !(1..=input.lineup_size).contains(&input.batting_slot) {
            return Err(DomainError::validation(format!(
                "Batting slot {} is outside a lineup of {}",
                input.batting_slot, input.lineup_size
            )));
        }

        let half = self.current;
        let movements = input.movements.unwrap_or_default();
        let effect = self.resolve_play(&movements, input.result.outs_recorded())?;

        let mut events = Vec::with_capacity(3);
        events.push(InningEvent::AtBatRecorded {
            inning_play_id: self.id,
            half,
            batter_id: input.batter_id,
            batting_slot: input.batting_slot,
            result: input.result,
            outs_after: effect.outs_after,
            runs_scored: effect.runs,
        });
        if !movements.is_empty() {
            events.push(InningEvent::RunnersAdvanced {
                inning_play_id: self.id,
                half,
                movements,
            });
        }

        let side = TeamSide::batting_in(half.half);
        let following = input.batting_slot % input.lineup_size + 1;
        match side {
            TeamSide::Away => self.away_next_slot = following,
            TeamSide::Home => self.home_next_slot = following,
        }

        let runs = effect.runs;
        let outs_on_play = effect.outs_on_play;
        let half_inning_completed = self.commit(effect, &mut events);
        let walk_off = half_inning_completed.is_none() && input.context.is_walk_off(half);
        if walk_off {
            events.push(self.mark_concluded());
        }

        Ok(AtBatApplied {
            half,
            runs_scored: runs,
            outs_on_play,
            half_inning_completed,
            walk_off,
            events,
        })
    }

    /// Move runners between at-bats (stolen base, passed ball, pickoff).
    ///
    /// The batter cannot appear here. Runners sent to `Out` add outs and can
    /// end the half-inning. Returns the emitted events.
    pub fn apply_runner_movements(
        &mut self,
        movements: &[RunnerMovement],
    ) -> Result<Vec<InningEvent>, DomainError> {
        self.require_open()?;
        if movements.iter().any(RunnerMovement::is_batter) {
            return Err(DomainError::constraint(
                "Runner movements between at-bats cannot include the batter",
            ));
        }
        if movements.is_empty() {
            return Ok(Vec::new());
        }

        let effect = self.resolve_play(movements, 0)?;
        let mut events = vec![InningEvent::RunnersAdvanced {
            inning_play_id: self.id,
            half: self.current,
            movements: movements.to_vec(),
        }];
        self.commit(effect, &mut events);
        Ok(events)
    }

    /// Close the play once the game is over; later at-bats are rejected.
    pub fn conclude(&mut self) -> Result<InningEvent, DomainError> {
        self.require_open()?;
        Ok(self.mark_concluded())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_open(&self) -> Result<(), DomainError> {
        if self.concluded {
            return Err(DomainError::invalid_state_transition(format!(
                "Inning play {} is concluded",
                self.id
            )));
        }
        Ok(())
    }

    fn mark_concluded(&mut self) -> InningEvent {
        self.concluded = true;
        InningEvent::Concluded {
            inning_play_id: self.id,
            at: self.current,
        }
    }

    /// Validate movements against the current bases and compute the result
    /// without touching `self`.
    fn resolve_play(
        &self,
        movements: &[RunnerMovement],
        outs_from_result: u8,
    ) -> Result<PlayEffect, DomainError> {
        let mut bases = self.bases;

        for (index, movement) in movements.iter().enumerate() {
            if movements[..index]
                .iter()
                .any(|earlier| earlier.runner_id == movement.runner_id)
            {
                return Err(DomainError::constraint(format!(
                    "Runner {} appears in more than one movement",
                    movement.runner_id
                )));
            }
            if let Some(from) = movement.from {
                if bases.runner_on(from) != Some(movement.runner_id) {
                    return Err(DomainError::constraint(format!(
                        "Runner {} is not on {}",
                        movement.runner_id, from
                    )));
                }
                if let Destination::Base(to) = movement.to {
                    if to < from {
                        return Err(DomainError::constraint(format!(
                            "Runner {} cannot move back from {} to {}",
                            movement.runner_id, from, to
                        )));
                    }
                }
            }
        }

        for movement in movements {
            if let Some(from) = movement.from {
                bases.clear(from);
            }
        }

        for movement in movements {
            if movement.is_batter() && bases.position_of(movement.runner_id).is_some() {
                return Err(DomainError::constraint(format!(
                    "Batter {} is already on base",
                    movement.runner_id
                )));
            }
            if let Destination::Base(to) = movement.to {
                if let Some(occupant) = bases.runner_on(to) {
                    return Err(DomainError::constraint(format!(
                        "Cannot move {} to {}: already occupied by {}",
                        movement.runner_id, to, occupant
                    )));
                }
                bases.place(to, Some(movement.runner_id));
            }
        }

        let outs_in_movements = movements.iter().filter(|m| m.is_out()).count() as u8;
        let outs_on_play = outs_from_result.max(outs_in_movements);

        Ok(PlayEffect {
            runs: runs_scored(movements),
            outs_on_play,
            outs_after: (self.outs + outs_on_play).min(OUTS_PER_HALF),
            bases,
        })
    }

    /// Apply a resolved play; on the third out, transition to the next half
    /// and return the half that ended.
    fn commit(&mut self, effect: PlayEffect, events: &mut Vec<InningEvent>) -> Option<HalfInning> {
        if effect.outs_after >= OUTS_PER_HALF {
            let completed = self.current;
            let next = completed.next();
            self.current = next;
            self.outs = 0;
            self.bases.clear_all();
            events.push(InningEvent::HalfInningCompleted {
                inning_play_id: self.id,
                completed,
                next,
            });
            Some(completed)
        } else {
            self.outs = effect.outs_after;
            self.bases = effect.bases;
            None
        }
    }
}

#[derive(Serialize, Deserialize)]
struct InningPlayWire {
    id: InningPlayId,
    game_id: GameId,
    current: HalfInning,
    outs: u8,
    bases: BasesOccupancy,
    away_next_slot: u32,
    home_next_slot: u32,
    concluded: bool,
}

impl TryFrom<InningPlayWire> for InningPlay {
    type Error = DomainError;

    fn try_from(wire: InningPlayWire) -> Result<Self, Self::Error> {
        let mut play = InningPlay::new(wire.game_id)
            .with_id(wire.id)
            .with_position(wire.current)?;
        play.set_outs(wire.outs)?;
        play.set_next_slot(TeamSide::Away, wire.away_next_slot)?;
        play.set_next_slot(TeamSide::Home, wire.home_next_slot)?;

        for (base, runner) in wire.bases.occupied() {
            if wire.bases.position_of(runner) != Some(base) {
                return Err(DomainError::validation(format!(
                    "Runner {} occupies more than one base",
                    runner
                )));
            }
        }
        play.bases = wire.bases;
        play.concluded = wire.concluded;
        Ok(play)
    }
}

impl From<InningPlay> for InningPlayWire {
    fn from(play: InningPlay) -> Self {
        Self {
            id: play.id,
            game_id: play.game_id,
            current: play.current,
            outs: play.outs,
            bases: play.bases,
            away_next_slot: play.away_next_slot,
            home_next_slot: play.home_next_slot,
            concluded: play.concluded,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
