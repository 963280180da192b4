//! Start game use case.
//!
//! Creates the game, both batting orders, and the inning play positioned at
//! the top of the first, then puts the game in progress.

use std::sync::Arc;

use dugout_domain::{DomainEvent, Game, GameRules, InningPlay, PlayerId, TeamLineup, TeamSide};

use crate::infrastructure::ports::{stream_id, EventStore, GameRepo, InningPlayRepo, LineupRepo};

use super::error::StartGameError;

/// Input for starting a game.
#[derive(Debug, Clone)]
pub struct StartGameInput {
    pub home_team: String,
    pub away_team: String,
    /// Rules for this game; the configured default when `None`
    pub rules: Option<GameRules>,
    /// Home batting order, leadoff first
    pub home_players: Vec<PlayerId>,
    /// Away batting order, leadoff first
    pub away_players: Vec<PlayerId>,
}

/// Aggregates created for a new game.
#[derive(Debug, Clone)]
pub struct StartedGame {
    pub game: Game,
    pub home_lineup: TeamLineup,
    pub away_lineup: TeamLineup,
    pub inning_play: InningPlay,
}

/// Start game use case.
pub struct StartGame {
    game_repo: Arc<dyn GameRepo>,
    inning_play_repo: Arc<dyn InningPlayRepo>,
    lineup_repo: Arc<dyn LineupRepo>,
    event_store: Arc<dyn EventStore>,
    default_rules: GameRules,
}

impl StartGame {
    pub fn new(
        game_repo: Arc<dyn GameRepo>,
        inning_play_repo: Arc<dyn InningPlayRepo>,
        lineup_repo: Arc<dyn LineupRepo>,
        event_store: Arc<dyn EventStore>,
        default_rules: GameRules,
    ) -> Self {
        Self {
            game_repo,
            inning_play_repo,
            lineup_repo,
            event_store,
            default_rules,
        }
    }

    /// Execute the start game use case.
    ///
    /// Lineups are validated before anything is written: an empty batting
    /// order, a duplicate player, or a roster over the rules' limit fails
    /// with [`StartGameError::Validation`].
    pub async fn execute(&self, input: StartGameInput) -> Result<StartedGame, StartGameError> {
        let rules = input.rules.unwrap_or_else(|| self.default_rules.clone());
        let roster_limit = rules.max_players_per_team();
        let mut game = Game::new(input.home_team, input.away_team, rules);

        let home_lineup = TeamLineup::new(game.id(), TeamSide::Home, input.home_players)?
            .with_roster_limit(roster_limit)?;
        let away_lineup = TeamLineup::new(game.id(), TeamSide::Away, input.away_players)?
            .with_roster_limit(roster_limit)?;
        let inning_play = InningPlay::new(game.id());

        let started = game.start()?;
        self.event_store
            .append(
                &stream_id("game", game.id()),
                "game",
                &[DomainEvent::from(started)],
                Some(0),
            )
            .await?;

        self.lineup_repo.save(&home_lineup).await?;
        self.lineup_repo.save(&away_lineup).await?;
        self.inning_play_repo.save(&inning_play).await?;
        self.game_repo.save(&game).await?;

        tracing::info!(
            game_id = %game.id(),
            home_team = %game.home_team(),
            away_team = %game.away_team(),
            innings = game.rules().total_innings(),
            "Game started"
        );

        Ok(StartedGame {
            game,
            home_lineup,
            away_lineup,
            inning_play,
        })
    }
}
