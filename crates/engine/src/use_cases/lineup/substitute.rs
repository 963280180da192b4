//! Substitute player use case.

use std::sync::Arc;

use dugout_domain::{DomainEvent, GameId, LineupEvent, PlayerId, TeamLineup, TeamSide};

use crate::infrastructure::ports::{stream_id, EventStore, GameRepo, LineupRepo};

use super::error::SubstituteError;

/// Input for a lineup change.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionInput {
    pub game_id: GameId,
    pub side: TeamSide,
    /// Batting order position, 1-based
    pub slot: u32,
    pub incoming: PlayerId,
}

/// Substitute player use case.
///
/// Swaps the occupant of a batting slot, applying the game's re-entry rule.
/// Allowed before and during a game, not after it ends.
pub struct SubstitutePlayer {
    game_repo: Arc<dyn GameRepo>,
    lineup_repo: Arc<dyn LineupRepo>,
    event_store: Arc<dyn EventStore>,
}

impl SubstitutePlayer {
    pub fn new(
        game_repo: Arc<dyn GameRepo>,
        lineup_repo: Arc<dyn LineupRepo>,
        event_store: Arc<dyn EventStore>,
    ) -> Self {
        Self {
            game_repo,
            lineup_repo,
            event_store,
        }
    }

    pub async fn execute(
        &self,
        input: SubstitutionInput,
    ) -> Result<(TeamLineup, LineupEvent), SubstituteError> {
        let game = self
            .game_repo
            .get(input.game_id)
            .await?
            .ok_or(SubstituteError::GameNotFound(input.game_id))?;
        if game.status().is_terminal() {
            return Err(SubstituteError::GameCompleted(input.game_id));
        }

        let mut lineup = self
            .lineup_repo
            .get_for_game(input.game_id, input.side)
            .await?
            .ok_or(SubstituteError::LineupNotFound {
                game_id: input.game_id,
                side: input.side,
            })?;

        let stream = stream_id("lineup", lineup.id());
        let version = self.event_store.stream_version(&stream).await?;

        let event = lineup.substitute(input.slot, input.incoming, game.rules().allow_re_entry())?;
        let recorded = DomainEvent::from(event.clone());
        self.event_store
            .append(&stream, "lineup", std::slice::from_ref(&recorded), Some(version))
            .await?;
        self.lineup_repo.save(&lineup).await?;

        tracing::info!(
            game_id = %input.game_id,
            side = %input.side,
            slot = input.slot,
            incoming = %input.incoming,
            event = recorded.event_type(),
            "Lineup changed"
        );

        Ok((lineup, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockEventStore, MockGameRepo, MockLineupRepo};
    use dugout_domain::{CompletionReason, Game, GameRules};

    struct Seed {
        game: Game,
        lineup: TeamLineup,
        starter: PlayerId,
    }

    fn seed(rules: GameRules) -> Seed {
        let mut game = Game::new("Home", "Away", rules);
        game.start().unwrap();
        let players: Vec<PlayerId> = (0..9).map(|_| PlayerId::new()).collect();
        let starter = players[2];
        let lineup = TeamLineup::new(game.id(), TeamSide::Home, players).unwrap();
        Seed {
            game,
            lineup,
            starter,
        }
    }

    fn repos(seed: &Seed) -> (MockGameRepo, MockLineupRepo) {
        let mut game_repo = MockGameRepo::new();
        let game = seed.game.clone();
        game_repo
            .expect_get()
            .returning(move |_| Ok(Some(game.clone())));
        let mut lineup_repo = MockLineupRepo::new();
        let lineup = seed.lineup.clone();
        lineup_repo
            .expect_get_for_game()
            .returning(move |_, _| Ok(Some(lineup.clone())));
        (game_repo, lineup_repo)
    }

    fn input(seed: &Seed, slot: u32, incoming: PlayerId) -> SubstitutionInput {
        SubstitutionInput {
            game_id: seed.game.id(),
            side: TeamSide::Home,
            slot,
            incoming,
        }
    }

    fn use_case(
        game_repo: MockGameRepo,
        lineup_repo: MockLineupRepo,
        event_store: MockEventStore,
    ) -> SubstitutePlayer {
        SubstitutePlayer::new(Arc::new(game_repo), Arc::new(lineup_repo), Arc::new(event_store))
    }

    #[tokio::test]
    async fn substitution_appends_event_and_saves_lineup() {
        let seed = seed(GameRules::recreational());
        let (game_repo, mut lineup_repo) = repos(&seed);
        let bench = PlayerId::new();
        lineup_repo
            .expect_save()
            .withf(move |lineup| lineup.occupant(3) == Some(bench))
            .times(1)
            .returning(|_| Ok(()));
        let mut event_store = MockEventStore::new();
        event_store.expect_stream_version().returning(|_| Ok(2));
        event_store
            .expect_append()
            .withf(|stream, aggregate_type, events, expected| {
                stream.starts_with("lineup-")
                    && aggregate_type == "lineup"
                    && events.len() == 1
                    && *expected == Some(2)
            })
            .times(1)
            .returning(|_, _, _, _| Ok(3));

        let use_case = use_case(game_repo, lineup_repo, event_store);
        let (lineup, event) = use_case.execute(input(&seed, 3, bench)).await.unwrap();

        assert!(lineup.departed().contains(&seed.starter));
        assert!(matches!(
            event,
            LineupEvent::PlayerSubstituted { slot: 3, incoming, .. } if incoming == bench
        ));
    }

    #[tokio::test]
    async fn re_entry_refused_when_rules_disallow_it() {
        let mut seed = seed(GameRules::tournament());
        let bench = PlayerId::new();
        seed.lineup.substitute(3, bench, false).unwrap();

        let (game_repo, mut lineup_repo) = repos(&seed);
        lineup_repo.expect_save().never();
        let mut event_store = MockEventStore::new();
        event_store.expect_stream_version().returning(|_| Ok(1));
        event_store.expect_append().never();

        let use_case = use_case(game_repo, lineup_repo, event_store);
        let result = use_case.execute(input(&seed, 3, seed.starter)).await;

        assert!(matches!(result, Err(SubstituteError::Rejected(_))));
    }

    #[tokio::test]
    async fn re_entry_allowed_in_original_slot() {
        let mut seed = seed(GameRules::recreational());
        let bench = PlayerId::new();
        seed.lineup.substitute(3, bench, true).unwrap();

        let (game_repo, mut lineup_repo) = repos(&seed);
        lineup_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut event_store = MockEventStore::new();
        event_store.expect_stream_version().returning(|_| Ok(1));
        event_store.expect_append().times(1).returning(|_, _, _, _| Ok(2));

        let use_case = use_case(game_repo, lineup_repo, event_store);
        let (lineup, event) = use_case.execute(input(&seed, 3, seed.starter)).await.unwrap();

        assert!(matches!(event, LineupEvent::PlayerReEntered { .. }));
        assert_eq!(lineup.occupant(3), Some(seed.starter));
    }

    #[tokio::test]
    async fn completed_game_locks_the_lineup() {
        let mut seed = seed(GameRules::recreational());
        seed.game.complete(CompletionReason::Regulation).unwrap();

        let (game_repo, _) = repos(&seed);
        let use_case = use_case(game_repo, MockLineupRepo::new(), MockEventStore::new());
        let result = use_case.execute(input(&seed, 1, PlayerId::new())).await;

        assert!(matches!(result, Err(SubstituteError::GameCompleted(_))));
    }

    #[tokio::test]
    async fn missing_lineup_returns_error() {
        let seed = seed(GameRules::recreational());
        let (game_repo, _) = repos(&seed);
        let mut lineup_repo = MockLineupRepo::new();
        lineup_repo.expect_get_for_game().returning(|_, _| Ok(None));

        let use_case = use_case(game_repo, lineup_repo, MockEventStore::new());
        let result = use_case.execute(input(&seed, 1, PlayerId::new())).await;

        assert!(matches!(
            result,
            Err(SubstituteError::LineupNotFound {
                side: TeamSide::Home,
                ..
            })
        ));
    }
}
