//! Game completion state machine.
//!
//! Evaluated once per at-bat, after runs are added, in precedence order:
//!
//! 1. **Walk-off** - the home team takes the lead in the bottom of the final
//!    or an extra inning and the half is still going. Ends immediately.
//! 2. **Mercy rule** - only after a bottom half ends, so both teams have had
//!    the same number of turns.
//! 3. **Regulation, top half** - the top of the final (or a later) inning
//!    ends with the home team ahead; the home half is not played.
//! 4. **Regulation, bottom half** - the bottom of the final inning ends
//!    without a tie.
//! 5. **Extra innings** - a bottom half past regulation ends. Not tied
//!    completes; tied completes only once the extra-inning cap is reached
//!    and ties are allowed.
//!
//! A bounded cap with ties disallowed never completes a tied game: play
//! continues until someone leads after a full inning.

use dugout_domain::{CompletionReason, GameRules, HalfInning, Score};

/// What the completion check needs to know about the play just recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// The half the play happened in
    pub half: HalfInning,
    /// Set when the play made the third out
    pub half_completed: Option<HalfInning>,
    pub runs_scored: u32,
    /// Score after the play's runs were added
    pub score: Score,
}

/// Decide whether the game just ended, and why.
pub fn evaluate(rules: &GameRules, play: &PlayResult) -> Option<CompletionReason> {
    let total = rules.total_innings();
    let score = play.score;

    let Some(ended) = play.half_completed else {
        let walk_off = play.half.is_bottom()
            && play.half.inning >= total
            && play.runs_scored > 0
            && score.home > score.away;
        return walk_off.then_some(CompletionReason::Walkoff);
    };

    if ended.is_top() {
        let home_ahead = score.home > score.away;
        return (ended.inning >= total && home_ahead).then_some(CompletionReason::Regulation);
    }

    if rules.is_mercy_rule(score.home, score.away, ended.inning) {
        return Some(CompletionReason::MercyRule);
    }

    if ended.inning < total {
        return None;
    }

    if !score.is_tied() {
        return Some(CompletionReason::Regulation);
    }

    let extra_played = ended.inning - total;
    if extra_played > 0 && rules.extra_innings_exhausted(extra_played) && rules.allow_tie_games() {
        return Some(CompletionReason::Regulation);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use dugout_domain::{ExtraInningsLimit, GameRulesConfig, MercyRuleTier};

    fn rules(config: GameRulesConfig) -> GameRules {
        GameRules::new(config).unwrap()
    }

    fn two_tier() -> GameRules {
        rules(GameRulesConfig {
            total_innings: 7,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![
                MercyRuleTier::new(10, 4).unwrap(),
                MercyRuleTier::new(7, 5).unwrap(),
            ],
            ..GameRulesConfig::default()
        })
    }

    fn no_mercy(max_extra: ExtraInningsLimit, allow_ties: bool) -> GameRules {
        rules(GameRulesConfig {
            total_innings: 7,
            mercy_rule_enabled: false,
            mercy_rule_tiers: Vec::new(),
            max_extra_innings: max_extra,
            allow_tie_games: allow_ties,
            ..GameRulesConfig::default()
        })
    }

    /// A play that made the third out of `ended`.
    fn half_over(ended: HalfInning, home: u32, away: u32) -> PlayResult {
        PlayResult {
            half: ended,
            half_completed: Some(ended),
            runs_scored: 0,
            score: Score::new(home, away),
        }
    }

    /// A play in the middle of `half` that scored `runs`.
    fn mid_half(half: HalfInning, runs: u32, home: u32, away: u32) -> PlayResult {
        PlayResult {
            half,
            half_completed: None,
            runs_scored: runs,
            score: Score::new(home, away),
        }
    }

    mod walk_off {
        use super::*;

        #[test]
        fn home_takes_lead_in_final_inning() {
            let play = mid_half(HalfInning::bottom(7), 2, 5, 4);
            assert_eq!(
                evaluate(&GameRules::recreational(), &play),
                Some(CompletionReason::Walkoff)
            );
        }

        #[test]
        fn beats_mercy_when_both_apply() {
            // 16-4 would satisfy the 10-run tier, but the game ends on the walk-off.
            let play = mid_half(HalfInning::bottom(7), 4, 16, 4);
            assert_eq!(evaluate(&two_tier(), &play), Some(CompletionReason::Walkoff));
        }

        #[test]
        fn extra_inning_walk_off() {
            let play = mid_half(HalfInning::bottom(9), 1, 3, 2);
            assert_eq!(
                evaluate(&GameRules::recreational(), &play),
                Some(CompletionReason::Walkoff)
            );
        }

        #[test]
        fn tying_run_is_not_a_walk_off() {
            let play = mid_half(HalfInning::bottom(7), 1, 4, 4);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }

        #[test]
        fn not_before_the_final_inning() {
            let play = mid_half(HalfInning::bottom(6), 3, 8, 2);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }

        #[test]
        fn needs_runs_on_the_play() {
            let play = mid_half(HalfInning::bottom(7), 0, 5, 4);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }

        #[test]
        fn never_in_a_top_half() {
            let play = mid_half(HalfInning::top(7), 3, 1, 9);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }
    }

    mod mercy {
        use super::*;

        #[test]
        fn never_fires_after_a_top_half() {
            let play = half_over(HalfInning::top(7), 5, 15);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }

        #[test]
        fn two_tier_thresholds() {
            let rules = two_tier();
            assert_eq!(
                evaluate(&rules, &half_over(HalfInning::bottom(4), 12, 2)),
                Some(CompletionReason::MercyRule)
            );
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(4), 11, 2)), None);
            assert_eq!(
                evaluate(&rules, &half_over(HalfInning::bottom(5), 1, 8)),
                Some(CompletionReason::MercyRule)
            );
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(5), 7, 1)), None);
        }

        #[test]
        fn disabled_mercy_never_fires() {
            let rules = no_mercy(ExtraInningsLimit::Unlimited, false);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(5), 30, 0)), None);
        }
    }

    mod regulation {
        use super::*;

        #[test]
        fn home_ahead_after_top_of_final_skips_bottom_half() {
            let play = half_over(HalfInning::top(7), 6, 3);
            assert_eq!(
                evaluate(&GameRules::recreational(), &play),
                Some(CompletionReason::Regulation)
            );
        }

        #[test]
        fn away_ahead_after_top_of_final_continues() {
            let play = half_over(HalfInning::top(7), 3, 6);
            assert_eq!(evaluate(&GameRules::recreational(), &play), None);
        }

        #[test]
        fn bottom_of_final_not_tied_completes() {
            let play = half_over(HalfInning::bottom(7), 3, 6);
            assert_eq!(
                evaluate(&GameRules::recreational(), &play),
                Some(CompletionReason::Regulation)
            );
        }

        #[test]
        fn earlier_innings_never_complete_without_mercy() {
            let rules = no_mercy(ExtraInningsLimit::Unlimited, false);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(6), 9, 1)), None);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::top(6), 9, 1)), None);
        }
    }

    mod extra_innings {
        use super::*;

        #[test]
        fn tie_after_regulation_always_plays_one_extra() {
            let rules = no_mercy(ExtraInningsLimit::Limited(0), true);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(7), 4, 4)), None);
        }

        #[test]
        fn tie_at_cap_with_ties_allowed_ends_in_regulation() {
            let rules = no_mercy(ExtraInningsLimit::Limited(0), true);
            assert_eq!(
                evaluate(&rules, &half_over(HalfInning::bottom(8), 4, 4)),
                Some(CompletionReason::Regulation)
            );
        }

        #[test]
        fn tie_before_cap_continues() {
            let rules = no_mercy(ExtraInningsLimit::Limited(2), true);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(8), 4, 4)), None);
            assert_eq!(
                evaluate(&rules, &half_over(HalfInning::bottom(9), 4, 4)),
                Some(CompletionReason::Regulation)
            );
        }

        #[test]
        fn tie_at_cap_without_ties_continues_indefinitely() {
            let rules = no_mercy(ExtraInningsLimit::Limited(1), false);
            for inning in 8..=15 {
                assert_eq!(
                    evaluate(&rules, &half_over(HalfInning::bottom(inning), 2, 2)),
                    None,
                    "inning {}",
                    inning
                );
            }
        }

        #[test]
        fn unlimited_extras_end_when_untied() {
            let rules = no_mercy(ExtraInningsLimit::Unlimited, false);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::bottom(11), 2, 2)), None);
            assert_eq!(
                evaluate(&rules, &half_over(HalfInning::bottom(11), 2, 3)),
                Some(CompletionReason::Regulation)
            );
        }

        #[test]
        fn away_ahead_after_extra_top_half_continues() {
            let rules = no_mercy(ExtraInningsLimit::Unlimited, false);
            assert_eq!(evaluate(&rules, &half_over(HalfInning::top(9), 2, 3)), None);
        }
    }
}
