//! TeamLineup aggregate - batting order and substitutions for one side
//!
//! # Re-entry
//!
//! A starter who has been substituted out may return once, and only to their
//! original slot, when the game's rules allow re-entry. Substitutes who leave
//! the game cannot come back.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::LineupEvent;
use crate::types::TeamSide;
use crate::{GameId, LineupId, PlayerId};

/// One position in the batting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingSlot {
    order: u32,
    starter: PlayerId,
    occupant: PlayerId,
    re_entered: bool,
}

impl BattingSlot {
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[inline]
    pub fn starter(&self) -> PlayerId {
        self.starter
    }

    #[inline]
    pub fn occupant(&self) -> PlayerId {
        self.occupant
    }

    #[inline]
    pub fn has_re_entered(&self) -> bool {
        self.re_entered
    }
}

/// A team's batting lineup for one game.
///
/// # Invariants
///
/// - Slots are numbered `1..=len` in batting order
/// - A player occupies at most one active slot
/// - A player who left the game is never active again unless re-entering
///
/// # Example
///
/// ```
/// use dugout_domain::aggregates::TeamLineup;
/// use dugout_domain::{GameId, PlayerId, TeamSide};
///
/// let players: Vec<PlayerId> = (0..9).map(|_| PlayerId::new()).collect();
/// let lineup = TeamLineup::new(GameId::new(), TeamSide::Home, players.clone()).unwrap();
///
/// assert_eq!(lineup.len(), 9);
/// assert_eq!(lineup.slot_of(players[3]), Some(4));
/// assert!(lineup.is_eligible_batter(players[0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamLineupWire", into = "TeamLineupWire")]
pub struct TeamLineup {
    id: LineupId,
    game_id: GameId,
    side: TeamSide,
    slots: Vec<BattingSlot>,
    departed: Vec<PlayerId>,
}

impl TeamLineup {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Build a lineup from players in batting order.
    ///
    /// # Errors
    ///
    /// Rejects an empty list and duplicate players.
    pub fn new(game_id: GameId, side: TeamSide, players: Vec<PlayerId>) -> Result<Self, DomainError> {
        if players.is_empty() {
            return Err(DomainError::validation(format!(
                "The {} lineup needs at least one batter",
                side
            )));
        }
        for (index, player) in players.iter().enumerate() {
            if players[..index].contains(player) {
                return Err(DomainError::validation(format!(
                    "Player {} appears more than once in the {} lineup",
                    player, side
                )));
            }
        }

        let slots = players
            .into_iter()
            .zip(1u32..)
            .map(|(player, order)| BattingSlot {
                order,
                starter: player,
                occupant: player,
                re_entered: false,
            })
            .collect();

        Ok(Self {
            id: LineupId::new(),
            game_id,
            side,
            slots,
            departed: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> LineupId {
        self.id
    }

    #[inline]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[inline]
    pub fn side(&self) -> TeamSide {
        self.side
    }

    /// Active slots in batting order.
    #[inline]
    pub fn active_slots(&self) -> &[BattingSlot] {
        &self.slots
    }

    /// Number of slots in the batting order.
    pub fn len(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Players who have left the game.
    #[inline]
    pub fn departed(&self) -> &[PlayerId] {
        &self.departed
    }

    /// The player currently batting in slot `order`.
    pub fn occupant(&self, order: u32) -> Option<PlayerId> {
        self.slot(order).map(BattingSlot::occupant)
    }

    /// The slot a player currently occupies.
    pub fn slot_of(&self, player: PlayerId) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.occupant == player)
            .map(BattingSlot::order)
    }

    /// Returns true if the player currently occupies a slot.
    pub fn is_eligible_batter(&self, player: PlayerId) -> bool {
        self.slot_of(player).is_some()
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the lineup's ID (used when loading from storage).
    pub fn with_id(mut self, id: LineupId) -> Self {
        self.id = id;
        self
    }

    /// Enforce a roster limit on the batting order.
    pub fn with_roster_limit(self, max_players: u32) -> Result<Self, DomainError> {
        if self.len() > max_players {
            return Err(DomainError::validation(format!(
                "The {} lineup has {} batters; the limit is {}",
                self.side,
                self.len(),
                max_players
            )));
        }
        Ok(self)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the occupant of slot `order` with `incoming`.
    ///
    /// # Errors
    ///
    /// - the slot does not exist
    /// - `incoming` already occupies a slot
    /// - `incoming` left the game and may not re-enter (re-entry disallowed,
    ///   not this slot's starter, or already re-entered once)
    pub fn substitute(
        &mut self,
        order: u32,
        incoming: PlayerId,
        allow_re_entry: bool,
    ) -> Result<LineupEvent, DomainError> {
        let lineup_id = self.id;
        if self.is_eligible_batter(incoming) {
            return Err(DomainError::constraint(format!(
                "Player {} is already in the {} lineup",
                incoming, self.side
            )));
        }

        let returning = self.departed.contains(&incoming);
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.order == order)
            .ok_or_else(|| DomainError::not_found("BattingSlot", order.to_string()))?;

        if returning {
            if !allow_re_entry {
                return Err(DomainError::constraint(format!(
                    "Player {} has left the game and re-entry is not allowed",
                    incoming
                )));
            }
            if slot.starter != incoming {
                return Err(DomainError::constraint(format!(
                    "Player {} may only re-enter in their original slot",
                    incoming
                )));
            }
            if slot.re_entered {
                return Err(DomainError::constraint(format!(
                    "Player {} has already re-entered once",
                    incoming
                )));
            }
        }

        let outgoing = std::mem::replace(&mut slot.occupant, incoming);
        if returning {
            slot.re_entered = true;
        }

        self.departed.retain(|player| *player != incoming);
        self.departed.push(outgoing);

        Ok(if returning {
            LineupEvent::PlayerReEntered {
                lineup_id,
                slot: order,
                outgoing,
                player: incoming,
            }
        } else {
            LineupEvent::PlayerSubstituted {
                lineup_id,
                slot: order,
                outgoing,
                incoming,
            }
        })
    }

    fn slot(&self, order: u32) -> Option<&BattingSlot> {
        self.slots.iter().find(|slot| slot.order == order)
    }
}

#[derive(Serialize, Deserialize)]
struct TeamLineupWire {
    id: LineupId,
    game_id: GameId,
    side: TeamSide,
    slots: Vec<BattingSlot>,
    departed: Vec<PlayerId>,
}

impl TryFrom<TeamLineupWire> for TeamLineup {
    type Error = DomainError;

    /// Same checks as [`TeamLineup::new`], plus consistency between the
    /// active slots and the players who left the game.
    fn try_from(wire: TeamLineupWire) -> Result<Self, Self::Error> {
        let side = wire.side;
        if wire.slots.is_empty() {
            return Err(DomainError::validation(format!(
                "The {} lineup needs at least one batter",
                side
            )));
        }
        for (index, slot) in wire.slots.iter().enumerate() {
            if slot.order as usize != index + 1 {
                return Err(DomainError::validation(format!(
                    "Slot {} of the {} lineup is out of batting order",
                    slot.order, side
                )));
            }
            let earlier = &wire.slots[..index];
            if earlier.iter().any(|other| other.occupant == slot.occupant) {
                return Err(DomainError::validation(format!(
                    "Player {} occupies more than one slot in the {} lineup",
                    slot.occupant, side
                )));
            }
            if earlier.iter().any(|other| other.starter == slot.starter) {
                return Err(DomainError::validation(format!(
                    "Player {} started in more than one slot of the {} lineup",
                    slot.starter, side
                )));
            }
            if wire.departed.contains(&slot.occupant) {
                return Err(DomainError::validation(format!(
                    "Player {} is both active and departed in the {} lineup",
                    slot.occupant, side
                )));
            }
        }
        for (index, player) in wire.departed.iter().enumerate() {
            if wire.departed[..index].contains(player) {
                return Err(DomainError::validation(format!(
                    "Player {} departed the {} lineup more than once",
                    player, side
                )));
            }
        }

        Ok(Self {
            id: wire.id,
            game_id: wire.game_id,
            side,
            slots: wire.slots,
            departed: wire.departed,
        })
    }
}

impl From<TeamLineup> for TeamLineupWire {
    fn from(lineup: TeamLineup) -> Self {
        Self {
            id: lineup.id,
            game_id: lineup.game_id,
            side: lineup.side,
            slots: lineup.slots,
            departed: lineup.departed,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
