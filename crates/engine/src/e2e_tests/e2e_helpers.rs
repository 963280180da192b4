//! Shared setup for end-to-end tests.

use std::fmt::Display;

use dugout_domain::{AtBatResultType, Game, GameId, GameRules, InningPlay, PlayerId};

use crate::infrastructure::ports::{stream_id, StoredEvent};
use crate::use_cases::{AtBatOutcome, RecordAtBatInput, StartGameInput};
use crate::App;

/// A started game and the app it lives in.
pub struct E2ETestContext {
    pub app: App,
    pub game_id: GameId,
    pub home: Vec<PlayerId>,
    pub away: Vec<PlayerId>,
}

impl E2ETestContext {
    /// In-memory app, recreational rules.
    pub async fn setup() -> Self {
        Self::setup_with(App::in_memory(), None).await
    }

    pub async fn setup_with_rules(rules: GameRules) -> Self {
        Self::setup_with(App::in_memory(), Some(rules)).await
    }

    /// Start a nine-against-nine game on `app`.
    pub async fn setup_with(app: App, rules: Option<GameRules>) -> Self {
        let home = roster(9);
        let away = roster(9);
        let started = app
            .use_cases
            .start_game
            .execute(StartGameInput {
                home_team: "Hornets".to_string(),
                away_team: "Comets".to_string(),
                rules,
                home_players: home.clone(),
                away_players: away.clone(),
            })
            .await
            .expect("Failed to start game");

        Self {
            game_id: started.game.id(),
            app,
            home,
            away,
        }
    }

    pub async fn game(&self) -> Game {
        self.app
            .repositories
            .game
            .get(self.game_id)
            .await
            .expect("Failed to load game")
            .expect("Game not found")
    }

    pub async fn inning_play(&self) -> InningPlay {
        self.app
            .repositories
            .inning_play
            .get_for_game(self.game_id)
            .await
            .expect("Failed to load inning play")
            .expect("Inning play not found")
    }

    /// The player in the batting side's next slot.
    pub async fn due_up(&self) -> PlayerId {
        let play = self.inning_play().await;
        let side = play.batting_side();
        let lineup = self
            .app
            .repositories
            .lineup
            .get_for_game(self.game_id, side)
            .await
            .expect("Failed to load lineup")
            .expect("Lineup not found");
        lineup
            .occupant(play.next_slot(side))
            .expect("Next slot is empty")
    }

    /// Record `result` for whoever is due up.
    pub async fn bat(&self, result: AtBatResultType) -> AtBatOutcome {
        let batter = self.due_up().await;
        self.bat_as(batter, result).await
    }

    pub async fn bat_as(&self, batter_id: PlayerId, result: AtBatResultType) -> AtBatOutcome {
        self.app
            .use_cases
            .record_at_bat
            .execute(RecordAtBatInput {
                game_id: self.game_id,
                batter_id,
                result,
                runner_overrides: None,
            })
            .await
            .expect("Record at-bat failed")
    }

    /// Three straight strikeouts; returns the outcome of the third.
    pub async fn retire_side(&self) -> AtBatOutcome {
        self.bat(AtBatResultType::Strikeout).await;
        self.bat(AtBatResultType::Strikeout).await;
        self.bat(AtBatResultType::Strikeout).await
    }

    /// Retire `halves` sides in a row; returns the last outcome.
    pub async fn retire_sides(&self, halves: u32) -> Option<AtBatOutcome> {
        let mut last = None;
        for _ in 0..halves {
            last = Some(self.retire_side().await);
        }
        last
    }

    pub async fn events(&self, aggregate_type: &str, id: impl Display) -> Vec<StoredEvent> {
        self.app
            .repositories
            .event_store
            .get_events(&stream_id(aggregate_type, id), None)
            .await
            .expect("Failed to read events")
    }
}

pub fn roster(size: usize) -> Vec<PlayerId> {
    (0..size).map(|_| PlayerId::new()).collect()
}
