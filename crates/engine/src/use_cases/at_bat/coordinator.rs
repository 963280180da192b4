//! At-bat coordinator.
//!
//! Keeps the game, inning play, and lineups consistent across one plate
//! appearance:
//!
//! 1. Validate preconditions (game in progress, inning in sync, batter
//!    eligible, overrides match the bases)
//! 2. Pick movements: overrides verbatim, otherwise the automatic table
//! 3. Credit RBI from the bases and outs before the play
//! 4. Record the at-bat on the inning play with the precomputed movements
//! 5. Add the runs to the batting side
//! 6. Run the completion state machine
//! 7. Complete the game, or advance its inning pointer after a third out
//!
//! All mutation happens on clones. A rejected at-bat returns a failed
//! outcome and no aggregates.

use dugout_domain::{
    rbi_for, runs_scored, AtBatApplied, AtBatInput, AtBatResultType, DomainEvent, Game,
    GameContext, InningPlay, PlayerId, RunnerMovement, TeamLineup, TeamSide,
};

use super::advancement::automatic_movements;
use super::completion::{self, PlayResult};
use super::error::AtBatError;
use super::types::{AtBatOutcome, InningTransition};

/// Pure coordinator: no I/O, no shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtBatCoordinator;

impl AtBatCoordinator {
    pub fn new() -> Self {
        Self
    }

    /// Record one at-bat against snapshots of the three aggregates.
    ///
    /// `runner_overrides` replaces the automatic advancement for any result
    /// type. Overrides that start on a base must name the runner currently on
    /// it; batter movements (`from: None`) are not checked against the bases.
    pub fn record_at_bat(
        &self,
        game: &Game,
        home_lineup: &TeamLineup,
        away_lineup: &TeamLineup,
        inning_play: &InningPlay,
        batter_id: PlayerId,
        result: AtBatResultType,
        runner_overrides: Option<&[RunnerMovement]>,
    ) -> AtBatOutcome {
        match self.try_record(
            game,
            home_lineup,
            away_lineup,
            inning_play,
            batter_id,
            result,
            runner_overrides,
        ) {
            Ok(outcome) => outcome,
            Err(error) => AtBatOutcome::failure(error),
        }
    }

    fn try_record(
        &self,
        game: &Game,
        home_lineup: &TeamLineup,
        away_lineup: &TeamLineup,
        inning_play: &InningPlay,
        batter_id: PlayerId,
        result: AtBatResultType,
        runner_overrides: Option<&[RunnerMovement]>,
    ) -> Result<AtBatOutcome, AtBatError> {
        check_state(game, home_lineup, away_lineup, inning_play)?;

        let side = game.batting_side();
        let lineup = match side {
            TeamSide::Home => home_lineup,
            TeamSide::Away => away_lineup,
        };
        let batting_slot = lineup
            .slot_of(batter_id)
            .ok_or(AtBatError::IneligibleBatter { batter_id, side })?;

        let bases_before = *inning_play.bases();
        if let Some(overrides) = runner_overrides {
            for movement in overrides {
                if let Some(base) = movement.from {
                    if bases_before.runner_on(base) != Some(movement.runner_id) {
                        return Err(AtBatError::RunnerNotOnBase {
                            runner_id: movement.runner_id,
                            base,
                        });
                    }
                }
            }
        }

        let movements = match runner_overrides {
            Some(overrides) => overrides.to_vec(),
            None => automatic_movements(result, &bases_before, batter_id),
        };
        let runs = runs_scored(&movements);
        let rbis = rbi_for(result, &bases_before, inning_play.outs());

        let score_before = game.score();
        let mut updated_play = inning_play.clone();
        let applied = updated_play
            .record_at_bat(AtBatInput {
                batter_id,
                batting_slot,
                lineup_size: lineup.len(),
                result,
                context: GameContext {
                    home_score: score_before.home,
                    away_score: score_before.away,
                    total_innings: game.rules().total_innings(),
                    runs_scoring: runs,
                },
                movements: Some(movements),
            })
            .map_err(AtBatError::InvalidAdvancement)?;

        let AtBatApplied {
            half,
            runs_scored,
            half_inning_completed,
            events: inning_events,
            ..
        } = applied;

        let mut events: Vec<DomainEvent> = inning_events.into_iter().map(Into::into).collect();
        let mut updated_game = game.clone();
        if runs_scored > 0 {
            let event = updated_game
                .add_runs(side, runs_scored)
                .map_err(AtBatError::GameTransition)?;
            events.push(event.into());
        }

        let completion_reason = completion::evaluate(
            game.rules(),
            &PlayResult {
                half,
                half_completed: half_inning_completed,
                runs_scored,
                score: updated_game.score(),
            },
        );

        let inning_transition = half_inning_completed.map(|_| InningTransition {
            new_inning: updated_play.inning(),
            new_top_half: updated_play.is_top_half(),
        });

        match completion_reason {
            Some(reason) => {
                let event = updated_game
                    .complete(reason)
                    .map_err(AtBatError::GameTransition)?;
                events.push(event.into());
                if !updated_play.is_concluded() {
                    let event = updated_play
                        .conclude()
                        .map_err(AtBatError::GameTransition)?;
                    events.push(event.into());
                }
            }
            None if half_inning_completed.is_some() => {
                let event = updated_game
                    .advance_to(updated_play.current())
                    .map_err(AtBatError::GameTransition)?;
                events.push(event.into());
            }
            None => {}
        }

        Ok(AtBatOutcome {
            success: true,
            updated_game: Some(updated_game),
            updated_inning_play: Some(updated_play),
            runs_scored,
            rbis,
            inning_complete: half_inning_completed.is_some(),
            inning_transition,
            game_complete: completion_reason.is_some(),
            completion_reason,
            error: None,
            events,
        })
    }
}

fn check_state(
    game: &Game,
    home_lineup: &TeamLineup,
    away_lineup: &TeamLineup,
    inning_play: &InningPlay,
) -> Result<(), AtBatError> {
    if !game.is_in_progress() {
        return Err(AtBatError::GameNotInProgress {
            game_id: game.id(),
            status: game.status(),
        });
    }

    let game_id = game.id();
    if inning_play.game_id() != game_id {
        return Err(AtBatError::ForeignAggregate {
            aggregate: "Inning play",
            game_id,
        });
    }
    for (lineup, side) in [(home_lineup, TeamSide::Home), (away_lineup, TeamSide::Away)] {
        if lineup.game_id() != game_id || lineup.side() != side {
            return Err(AtBatError::ForeignAggregate {
                aggregate: match side {
                    TeamSide::Home => "Home lineup",
                    TeamSide::Away => "Away lineup",
                },
                game_id,
            });
        }
    }

    if inning_play.is_concluded() {
        return Err(AtBatError::InningPlayConcluded { game_id });
    }
    if inning_play.current() != game.current() {
        return Err(AtBatError::InningOutOfSync {
            game: game.current(),
            inning_play: inning_play.current(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::at_bat::AtBatErrorKind;
    use dugout_domain::{
        Base, CompletionReason, Destination, ExtraInningsLimit, GameEvent, GameRules,
        GameRulesConfig, GameStatus, HalfInning, InningEvent, MercyRuleTier, Score,
    };

    /// A game in progress with two nine-player lineups.
    struct Fixture {
        game: Game,
        home: TeamLineup,
        away: TeamLineup,
        play: InningPlay,
        home_players: Vec<PlayerId>,
        away_players: Vec<PlayerId>,
    }

    impl Fixture {
        fn new(rules: GameRules) -> Self {
            let mut game = Game::new("Home", "Away", rules);
            game.start().unwrap();
            let home_players: Vec<PlayerId> = (0..9).map(|_| PlayerId::new()).collect();
            let away_players: Vec<PlayerId> = (0..9).map(|_| PlayerId::new()).collect();
            let home = TeamLineup::new(game.id(), TeamSide::Home, home_players.clone()).unwrap();
            let away = TeamLineup::new(game.id(), TeamSide::Away, away_players.clone()).unwrap();
            let play = InningPlay::new(game.id());
            Self {
                game,
                home,
                away,
                play,
                home_players,
                away_players,
            }
        }

        /// Move both aggregates to `at` with the given score.
        fn at(mut self, at: HalfInning, home: u32, away: u32) -> Self {
            let game = self.game.clone();
            self.game = game
                .with_state(GameStatus::InProgress, Score::new(home, away), at, None)
                .unwrap();
            self.play = self.play.with_position(at).unwrap();
            self
        }

        fn batter(&self) -> PlayerId {
            if self.game.is_top_half() {
                self.away_players[0]
            } else {
                self.home_players[0]
            }
        }

        fn record(
            &self,
            batter: PlayerId,
            result: AtBatResultType,
            overrides: Option<&[RunnerMovement]>,
        ) -> AtBatOutcome {
            AtBatCoordinator::new().record_at_bat(
                &self.game,
                &self.home,
                &self.away,
                &self.play,
                batter,
                result,
                overrides,
            )
        }
    }

    fn two_tier() -> GameRules {
        GameRules::new(GameRulesConfig {
            total_innings: 7,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![
                MercyRuleTier::new(10, 4).unwrap(),
                MercyRuleTier::new(7, 5).unwrap(),
            ],
            ..GameRulesConfig::default()
        })
        .unwrap()
    }

    fn no_mercy(max_extra: ExtraInningsLimit, allow_ties: bool) -> GameRules {
        GameRules::new(GameRulesConfig {
            total_innings: 7,
            mercy_rule_enabled: false,
            mercy_rule_tiers: Vec::new(),
            max_extra_innings: max_extra,
            allow_tie_games: allow_ties,
            ..GameRulesConfig::default()
        })
        .unwrap()
    }

    mod preconditions {
        use super::*;

        #[test]
        fn game_not_started_is_a_state_error() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.game = Game::new("Home", "Away", GameRules::recreational());
            let outcome = fixture.record(PlayerId::new(), AtBatResultType::Single, None);

            assert!(!outcome.success);
            assert_eq!(outcome.error.as_ref().map(AtBatError::kind), Some(AtBatErrorKind::State));
        }

        #[test]
        fn completed_game_rejects_at_bats() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.game.complete(CompletionReason::Regulation).unwrap();
            let batter = fixture.batter();
            let outcome = fixture.record(batter, AtBatResultType::Single, None);

            assert!(matches!(
                outcome.error,
                Some(AtBatError::GameNotInProgress {
                    status: GameStatus::Completed,
                    ..
                })
            ));
        }

        #[test]
        fn home_batter_in_top_half_is_ineligible() {
            let fixture = Fixture::new(GameRules::recreational());
            let outcome = fixture.record(fixture.home_players[0], AtBatResultType::Single, None);

            assert!(!outcome.success);
            assert!(matches!(
                outcome.error,
                Some(AtBatError::IneligibleBatter {
                    side: TeamSide::Away,
                    ..
                })
            ));
            assert_eq!(
                outcome.error.as_ref().map(AtBatError::kind),
                Some(AtBatErrorKind::Eligibility)
            );
        }

        #[test]
        fn substituted_out_player_is_ineligible() {
            let mut fixture = Fixture::new(GameRules::recreational());
            let starter = fixture.away_players[0];
            fixture.away.substitute(1, PlayerId::new(), true).unwrap();

            let outcome = fixture.record(starter, AtBatResultType::Single, None);
            assert!(matches!(outcome.error, Some(AtBatError::IneligibleBatter { .. })));
        }

        #[test]
        fn out_of_sync_inning_play_is_rejected() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play = fixture.play.clone().with_position(HalfInning::bottom(1)).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Single, None);
            assert!(matches!(outcome.error, Some(AtBatError::InningOutOfSync { .. })));
        }

        #[test]
        fn lineup_from_another_game_is_rejected() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.home =
                TeamLineup::new(dugout_domain::GameId::new(), TeamSide::Home, fixture.home_players.clone())
                    .unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Single, None);
            assert!(matches!(outcome.error, Some(AtBatError::ForeignAggregate { .. })));
        }

        #[test]
        fn concluded_inning_play_is_rejected() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play.conclude().unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Single, None);
            assert!(matches!(outcome.error, Some(AtBatError::InningPlayConcluded { .. })));
        }
    }

    mod overrides {
        use super::*;

        #[test]
        fn runs_equal_movements_home() {
            let mut fixture = Fixture::new(GameRules::recreational());
            let (on_second, on_third) = (fixture.away_players[5], fixture.away_players[6]);
            fixture.play.set_runner(Base::Second, Some(on_second));
            fixture.play.set_runner(Base::Third, Some(on_third));
            let batter = fixture.batter();

            let overrides = vec![
                RunnerMovement::runner(on_third, Base::Third, Destination::Home),
                RunnerMovement::runner(on_second, Base::Second, Destination::Home),
                RunnerMovement::batter(batter, Destination::Home),
            ];
            let outcome = fixture.record(batter, AtBatResultType::Triple, Some(&overrides));

            assert!(outcome.success);
            assert_eq!(outcome.runs_scored, 3);
            assert_eq!(outcome.updated_game.unwrap().score(), Score::new(0, 3));
        }

        #[test]
        fn invalid_override_leaves_everything_unset() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play.set_runner(Base::First, Some(fixture.away_players[4]));
            let game_before = fixture.game.clone();
            let play_before = fixture.play.clone();
            let batter = fixture.batter();

            // Nobody is on second.
            let overrides = vec![RunnerMovement::runner(
                fixture.away_players[4],
                Base::Second,
                Destination::Home,
            )];
            let outcome = fixture.record(batter, AtBatResultType::Single, Some(&overrides));

            assert!(!outcome.success);
            assert!(outcome.updated_game.is_none());
            assert!(outcome.updated_inning_play.is_none());
            assert!(outcome.events.is_empty());
            assert_eq!(outcome.runs_scored, 0);
            assert!(matches!(
                outcome.error,
                Some(AtBatError::RunnerNotOnBase {
                    base: Base::Second,
                    ..
                })
            ));
            assert!(outcome.error_message().unwrap().contains("SECOND"));
            assert_eq!(fixture.game, game_before);
            assert_eq!(fixture.play, play_before);
        }

        #[test]
        fn override_onto_occupied_base_is_an_advancement_error() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play.set_runner(Base::First, Some(fixture.away_players[4]));
            let batter = fixture.batter();

            // Batter to first while the runner stays there.
            let overrides = vec![RunnerMovement::batter(batter, Destination::Base(Base::First))];
            let outcome = fixture.record(batter, AtBatResultType::Single, Some(&overrides));

            assert!(matches!(outcome.error, Some(AtBatError::InvalidAdvancement(_))));
            assert_eq!(
                outcome.error.as_ref().map(AtBatError::kind),
                Some(AtBatErrorKind::Advancement)
            );
        }

        #[test]
        fn non_hit_override_applies_in_one_step() {
            let mut fixture = Fixture::new(GameRules::recreational());
            let runner = fixture.away_players[3];
            fixture.play.set_runner(Base::Second, Some(runner));
            let batter = fixture.batter();

            // Error: batter reaches, runner scores from second.
            let overrides = vec![
                RunnerMovement::runner(runner, Base::Second, Destination::Home),
                RunnerMovement::batter(batter, Destination::Base(Base::First)),
            ];
            let outcome = fixture.record(batter, AtBatResultType::Error, Some(&overrides));

            assert!(outcome.success);
            assert_eq!(outcome.runs_scored, 1);
            assert_eq!(outcome.rbis, 0);
            let play = outcome.updated_inning_play.unwrap();
            assert_eq!(play.bases().runner_on(Base::First), Some(batter));
            assert!(!play.bases().is_occupied(Base::Second));
        }
    }

    mod automatic {
        use super::*;

        #[test]
        fn bases_loaded_single_scores_two_with_two_rbi() {
            let mut fixture = Fixture::new(GameRules::recreational());
            let runners = &fixture.away_players[5..8];
            fixture.play.set_runner(Base::First, Some(runners[0]));
            fixture.play.set_runner(Base::Second, Some(runners[1]));
            fixture.play.set_runner(Base::Third, Some(runners[2]));
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Single, None);

            assert!(outcome.success);
            assert_eq!(outcome.runs_scored, 2);
            assert_eq!(outcome.rbis, 2);
            let play = outcome.updated_inning_play.unwrap();
            assert_eq!(play.bases().runner_on(Base::First), Some(batter));
            assert_eq!(play.bases().runner_on(Base::Second), Some(runners[0]));
            assert_eq!(play.next_slot(TeamSide::Away), 2);
        }

        #[test]
        fn sacrifice_fly_scores_runner_and_records_out() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play.set_runner(Base::Third, Some(fixture.away_players[8]));
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::SacrificeFly, None);

            assert_eq!(outcome.runs_scored, 1);
            assert_eq!(outcome.rbis, 1);
            let play = outcome.updated_inning_play.unwrap();
            assert_eq!(play.outs(), 1);
            assert!(play.bases().is_empty());
        }

        #[test]
        fn events_cover_inning_and_score() {
            let fixture = Fixture::new(GameRules::recreational());
            let batter = fixture.batter();
            let outcome = fixture.record(batter, AtBatResultType::HomeRun, None);

            let types: Vec<&str> = outcome.events.iter().map(DomainEvent::event_type).collect();
            assert_eq!(types, vec!["at_bat_recorded", "runners_advanced", "runs_scored"]);
        }

        #[test]
        fn caller_aggregates_are_untouched_on_success() {
            let fixture = Fixture::new(GameRules::recreational());
            let before = (fixture.game.clone(), fixture.play.clone());
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::HomeRun, None);

            assert!(outcome.success);
            assert_eq!((fixture.game.clone(), fixture.play.clone()), before);
        }
    }

    mod inning_transitions {
        use super::*;

        #[test]
        fn third_out_advances_game_pointer() {
            let mut fixture = Fixture::new(GameRules::recreational());
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);

            assert!(outcome.inning_complete);
            assert_eq!(
                outcome.inning_transition,
                Some(InningTransition {
                    new_inning: 1,
                    new_top_half: false
                })
            );
            assert!(!outcome.game_complete);
            let game = outcome.updated_game.unwrap();
            assert_eq!(game.current(), HalfInning::bottom(1));
            assert_eq!(outcome.updated_inning_play.unwrap().current(), HalfInning::bottom(1));
            assert!(outcome
                .events
                .iter()
                .any(|e| matches!(e, DomainEvent::Game(GameEvent::InningAdvanced { .. }))));
        }

        #[test]
        fn bottom_half_ending_moves_to_next_inning() {
            let mut fixture = Fixture::new(GameRules::recreational()).at(HalfInning::bottom(3), 2, 2);
            fixture.play.set_outs(1).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::DoublePlay, None);

            assert_eq!(
                outcome.inning_transition,
                Some(InningTransition {
                    new_inning: 4,
                    new_top_half: true
                })
            );
            assert_eq!(outcome.updated_game.unwrap().current(), HalfInning::top(4));
        }

        #[test]
        fn top_of_seventh_blowout_still_gives_home_its_turn() {
            let mut fixture = Fixture::new(GameRules::recreational()).at(HalfInning::top(7), 5, 15);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::GroundOut, None);

            assert!(outcome.success);
            assert!(!outcome.game_complete);
            assert_eq!(
                outcome.inning_transition,
                Some(InningTransition {
                    new_inning: 7,
                    new_top_half: false
                })
            );
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn walk_off_beats_mercy() {
            // Home trails by one in the bottom of the 7th; two runs score on
            // the play and the final margin would also satisfy a mercy tier.
            let rules = GameRules::new(GameRulesConfig {
                total_innings: 7,
                mercy_rule_enabled: true,
                mercy_rule_tiers: vec![MercyRuleTier::new(1, 1).unwrap()],
                ..GameRulesConfig::default()
            })
            .unwrap();
            let mut fixture = Fixture::new(rules).at(HalfInning::bottom(7), 3, 4);
            let runner = fixture.home_players[6];
            fixture.play.set_runner(Base::Third, Some(runner));
            let batter = fixture.batter();

            let overrides = vec![
                RunnerMovement::runner(runner, Base::Third, Destination::Home),
                RunnerMovement::batter(batter, Destination::Home),
            ];
            let outcome = fixture.record(batter, AtBatResultType::HomeRun, Some(&overrides));

            assert!(outcome.game_complete);
            assert_eq!(outcome.completion_reason, Some(CompletionReason::Walkoff));
            assert!(!outcome.inning_complete);
            let game = outcome.updated_game.unwrap();
            assert_eq!(game.status(), GameStatus::Completed);
            assert_eq!(game.score(), Score::new(5, 4));
            assert_eq!(game.current(), HalfInning::bottom(7));
            assert!(outcome.updated_inning_play.unwrap().is_concluded());
        }

        #[test]
        fn walk_off_walk_with_bases_loaded() {
            let mut fixture =
                Fixture::new(GameRules::recreational()).at(HalfInning::bottom(7), 4, 4);
            fixture.play.set_runner(Base::First, Some(fixture.home_players[5]));
            fixture.play.set_runner(Base::Second, Some(fixture.home_players[6]));
            fixture.play.set_runner(Base::Third, Some(fixture.home_players[7]));
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Walk, None);

            assert_eq!(outcome.completion_reason, Some(CompletionReason::Walkoff));
            assert_eq!(outcome.rbis, 1);
            assert!(outcome.events.iter().any(|e| matches!(
                e,
                DomainEvent::Inning(InningEvent::Concluded { .. })
            )));
        }

        #[test]
        fn mercy_two_tier_after_bottom_of_fourth() {
            let mut fixture = Fixture::new(two_tier()).at(HalfInning::bottom(4), 12, 2);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::FlyOut, None);

            assert!(outcome.inning_complete);
            assert_eq!(outcome.completion_reason, Some(CompletionReason::MercyRule));
            let game = outcome.updated_game.unwrap();
            // The game ended where it was played, not where the pointer would go.
            assert_eq!(game.current(), HalfInning::bottom(4));
            assert_eq!(game.completion_reason(), Some(CompletionReason::MercyRule));
        }

        #[test]
        fn mercy_two_tier_short_of_threshold_continues() {
            let mut fixture = Fixture::new(two_tier()).at(HalfInning::bottom(4), 11, 2);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::FlyOut, None);

            assert!(!outcome.game_complete);
            assert_eq!(outcome.updated_game.unwrap().current(), HalfInning::top(5));
        }

        #[test]
        fn mercy_second_tier_in_fifth() {
            let rules = two_tier();
            for (home, away, expected) in [
                (1, 8, Some(CompletionReason::MercyRule)),
                (1, 7, None),
            ] {
                let mut fixture = Fixture::new(rules.clone()).at(HalfInning::bottom(5), home, away);
                fixture.play.set_outs(2).unwrap();
                let batter = fixture.batter();
                let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);
                assert_eq!(outcome.completion_reason, expected, "{}-{}", home, away);
            }
        }

        #[test]
        fn regulation_tie_plays_an_extra_inning_then_ends_tied() {
            let rules = no_mercy(ExtraInningsLimit::Limited(0), true);

            let mut fixture = Fixture::new(rules.clone()).at(HalfInning::bottom(7), 4, 4);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();
            let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);
            assert!(!outcome.game_complete);
            assert_eq!(
                outcome.inning_transition,
                Some(InningTransition {
                    new_inning: 8,
                    new_top_half: true
                })
            );

            let mut fixture = Fixture::new(rules).at(HalfInning::bottom(8), 4, 4);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();
            let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);
            assert!(outcome.game_complete);
            assert_eq!(outcome.completion_reason, Some(CompletionReason::Regulation));
            assert!(outcome.updated_game.unwrap().score().is_tied());
        }

        #[test]
        fn home_ahead_after_top_of_seventh_ends_game() {
            let mut fixture = Fixture::new(GameRules::recreational()).at(HalfInning::top(7), 6, 2);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);

            assert_eq!(outcome.completion_reason, Some(CompletionReason::Regulation));
            assert_eq!(outcome.updated_game.unwrap().current(), HalfInning::top(7));
            assert!(outcome.updated_inning_play.unwrap().is_concluded());
        }

        #[test]
        fn completion_events_follow_play_events() {
            let mut fixture = Fixture::new(GameRules::recreational()).at(HalfInning::top(7), 6, 2);
            fixture.play.set_outs(2).unwrap();
            let batter = fixture.batter();

            let outcome = fixture.record(batter, AtBatResultType::Strikeout, None);
            let types: Vec<&str> = outcome.events.iter().map(DomainEvent::event_type).collect();

            assert_eq!(
                types,
                vec![
                    "at_bat_recorded",
                    "half_inning_completed",
                    "game_completed",
                    "inning_play_concluded"
                ]
            );
        }
    }
}
