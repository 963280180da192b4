//! Record at-bat use case.
//!
//! Loads the game's aggregates, runs the coordinator, and persists an
//! accepted at-bat: the inning play and game events in one all-or-nothing
//! append (with optimistic version checks), then the updated aggregates.
//! A rejected at-bat writes nothing.

use std::sync::Arc;

use dugout_domain::{DomainEvent, Game, GameId, InningPlay, TeamLineup, TeamSide};

use crate::infrastructure::ports::{
    stream_id, EventStore, GameRepo, InningPlayRepo, LineupRepo, StreamAppend,
};

use super::coordinator::AtBatCoordinator;
use super::error::RecordAtBatError;
use super::types::{AtBatOutcome, RecordAtBatInput};

/// Record at-bat use case.
///
/// Orchestrates: aggregate loading, coordination, event append, saves.
pub struct RecordAtBat {
    game_repo: Arc<dyn GameRepo>,
    inning_play_repo: Arc<dyn InningPlayRepo>,
    lineup_repo: Arc<dyn LineupRepo>,
    event_store: Arc<dyn EventStore>,
    coordinator: AtBatCoordinator,
}

impl RecordAtBat {
    pub fn new(
        game_repo: Arc<dyn GameRepo>,
        inning_play_repo: Arc<dyn InningPlayRepo>,
        lineup_repo: Arc<dyn LineupRepo>,
        event_store: Arc<dyn EventStore>,
    ) -> Self {
        Self {
            game_repo,
            inning_play_repo,
            lineup_repo,
            event_store,
            coordinator: AtBatCoordinator::new(),
        }
    }

    /// Execute the record at-bat use case.
    ///
    /// # Returns
    /// * `Ok(AtBatOutcome)` - the coordinator's outcome, accepted or rejected
    /// * `Err(RecordAtBatError)` - an aggregate was missing or storage failed
    pub async fn execute(&self, input: RecordAtBatInput) -> Result<AtBatOutcome, RecordAtBatError> {
        let game_id = input.game_id;
        let game = self
            .game_repo
            .get(game_id)
            .await?
            .ok_or(RecordAtBatError::GameNotFound(game_id))?;
        let inning_play = self
            .inning_play_repo
            .get_for_game(game_id)
            .await?
            .ok_or(RecordAtBatError::InningPlayNotFound(game_id))?;
        let home_lineup = self.load_lineup(game_id, TeamSide::Home).await?;
        let away_lineup = self.load_lineup(game_id, TeamSide::Away).await?;

        let game_stream = stream_id("game", game.id());
        let inning_stream = stream_id("inning_play", inning_play.id());
        let game_version = self.event_store.stream_version(&game_stream).await?;
        let inning_version = self.event_store.stream_version(&inning_stream).await?;

        let outcome = self.coordinator.record_at_bat(
            &game,
            &home_lineup,
            &away_lineup,
            &inning_play,
            input.batter_id,
            input.result,
            input.runner_overrides.as_deref(),
        );

        let (Some(updated_game), Some(updated_play)) = (
            outcome.updated_game.clone(),
            outcome.updated_inning_play.clone(),
        ) else {
            tracing::warn!(
                game_id = %game_id,
                batter_id = %input.batter_id,
                result = %input.result,
                error = ?outcome.error_message(),
                "At-bat rejected"
            );
            return Ok(outcome);
        };

        let (game_events, inning_events): (Vec<DomainEvent>, Vec<DomainEvent>) = outcome
            .events
            .iter()
            .cloned()
            .partition(|event| matches!(event, DomainEvent::Game(_)));

        let batch: Vec<StreamAppend> = [
            (inning_stream, "inning_play", inning_events, inning_version),
            (game_stream, "game", game_events, game_version),
        ]
        .into_iter()
        .filter(|(_, _, events, _)| !events.is_empty())
        .map(|(stream, aggregate_type, events, version)| {
            StreamAppend::new(stream, aggregate_type, events, Some(version))
        })
        .collect();
        self.event_store.append_all(&batch).await?;

        self.save(&updated_game, &updated_play).await?;

        tracing::info!(
            game_id = %game_id,
            batter_id = %input.batter_id,
            result = %input.result,
            runs = outcome.runs_scored,
            rbis = outcome.rbis,
            half = %updated_game.current(),
            "At-bat recorded"
        );
        if let Some(reason) = outcome.completion_reason {
            let score = updated_game.score();
            tracing::info!(
                game_id = %game_id,
                reason = %reason,
                home = score.home,
                away = score.away,
                "Game completed"
            );
        }

        Ok(outcome)
    }

    async fn load_lineup(
        &self,
        game_id: GameId,
        side: TeamSide,
    ) -> Result<TeamLineup, RecordAtBatError> {
        self.lineup_repo
            .get_for_game(game_id, side)
            .await?
            .ok_or(RecordAtBatError::LineupNotFound { game_id, side })
    }

    async fn save(&self, game: &Game, inning_play: &InningPlay) -> Result<(), RecordAtBatError> {
        self.inning_play_repo.save(inning_play).await?;
        self.game_repo.save(game).await?;
        Ok(())
    }
}
