use crate::config::Validate;
use crate::games::SessionRng;
use crate::highscores::{HighScoreEntry, HighScoreStore, HighScoreTable, sanitize_label};
use crate::{log, log_warn};
use super::game_state::{GameSnapshot, SnakeGameState, TickOutcome};
use super::settings::SnakeSettings;
use super::types::{Cell, EndReason, GameStatus, InputCommand};

/// One player's run of games: the state machine plus everything that outlives a restart.
pub struct SnakeSession {
    settings: SnakeSettings,
    state: SnakeGameState,
    rng: SessionRng,
    high_scores: HighScoreTable,
    store: Option<HighScoreStore>,
    player_label: Option<String>,
    last_rank: Option<usize>,
}

impl SnakeSession {
    pub fn new_session(
        settings: SnakeSettings,
        seed: u64,
        store: Option<HighScoreStore>,
    ) -> Result<Self, String> {
        settings.validate()?;

        let (high_scores, store) = match store {
            Some(store) => match store.load() {
                Ok(table) => (table, Some(store)),
                Err(e) => {
                    // Leave the unreadable file alone; scores from this run stay in memory.
                    log_warn!("Starting with empty high scores, saving disabled: {}", e);
                    (HighScoreTable::new(), None)
                }
            },
            None => (HighScoreTable::new(), None),
        };

        let mut rng = SessionRng::new(seed);
        let state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "Session started on {}x{} field, seed {}",
            settings.field_width,
            settings.field_height,
            seed
        );

        Ok(Self {
            settings,
            state,
            rng,
            high_scores,
            store,
            player_label: None,
            last_rank: None,
        })
    }

    pub fn with_player_label(mut self, label: Option<&str>) -> Self {
        self.set_player_label(label);
        self
    }

    pub fn set_player_label(&mut self, label: Option<&str>) {
        self.player_label = label.and_then(sanitize_label);
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn place_food(&mut self, cell: Cell) -> bool {
        self.state.place_food(cell)
    }

    /// Commands only touch pending state; collisions are resolved by [`Self::tick`].
    pub fn handle_input(&mut self, command: InputCommand) {
        if let Some(direction) = command.direction() {
            self.state.set_direction(direction);
            return;
        }

        match command {
            InputCommand::Pause => {
                self.state.toggle_pause();
            }
            InputCommand::Restart => self.restart(),
            InputCommand::Quit => {
                log!("Session quit with score {}", self.state.score());
                self.state.quit();
            }
            InputCommand::Up | InputCommand::Down | InputCommand::Left | InputCommand::Right => {}
        }
    }

    pub fn tick(&mut self) -> GameSnapshot {
        if let TickOutcome::Ended(reason) = self.state.tick(&mut self.rng) {
            self.finish_game(reason);
        }
        self.state.snapshot()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn get_high_scores(&self) -> &[HighScoreEntry] {
        self.high_scores.entries()
    }

    /// Rank of the score recorded by the last finished game, if it made the table.
    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Renames the score recorded by the last finished game and saves the table. The label also
    /// becomes the default for later games. Returns `false` when no score is waiting for a name.
    pub fn label_last_score(&mut self, label: Option<&str>) -> bool {
        self.set_player_label(label);

        let Some(rank) = self.last_rank else {
            return false;
        };
        if !self.high_scores.relabel(rank, self.player_label.as_deref()) {
            return false;
        }
        log!("High score #{} labelled {:?}", rank + 1, self.player_label);
        self.save_high_scores();
        true
    }

    fn restart(&mut self) {
        self.state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.last_rank = None;
        log!("Game restarted");
    }

    fn finish_game(&mut self, reason: EndReason) {
        let score = self.state.score();
        self.last_rank = self
            .high_scores
            .record(score, self.player_label.as_deref());
        log!(
            "Game over ({:?}) after {} ticks, score {}, rank {:?}",
            reason,
            self.state.ticks(),
            score,
            self.last_rank.map(|rank| rank + 1)
        );

        self.save_high_scores();
    }

    fn save_high_scores(&self) {
        if let Some(ref store) = self.store
            && let Err(e) = store.save(&self.high_scores)
        {
            log_warn!("Failed to save high scores: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryContentProvider;
    use crate::games::snake::{Direction, SCORE_PER_FOOD};

    fn session(width: usize, height: usize) -> SnakeSession {
        SnakeSession::new_session(SnakeSettings::with_field(width, height), 42, None).unwrap()
    }

    fn crash_into_left_wall(session: &mut SnakeSession) -> GameSnapshot {
        session.handle_input(InputCommand::Up);
        session.tick();
        session.handle_input(InputCommand::Left);
        loop {
            let snapshot = session.tick();
            if snapshot.status.is_over() {
                return snapshot;
            }
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = SnakeSession::new_session(SnakeSettings::with_field(2, 2), 1, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_first_tick_moves_right() {
        let mut session = session(20, 20);
        session.place_food(Cell::new(0, 0));
        let snapshot = session.tick();
        assert_eq!(snapshot.head(), Some(Cell::new(11, 10)));
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.status, GameStatus::Running);
    }

    #[test]
    fn test_eating_scores_and_respawns_food() {
        let mut session = session(20, 20);
        assert!(session.place_food(Cell::new(11, 10)));
        let snapshot = session.tick();
        assert_eq!(snapshot.score, SCORE_PER_FOOD);
        assert_eq!(snapshot.snake, vec![Cell::new(11, 10), Cell::new(10, 10)]);
        let food = snapshot.food.unwrap();
        assert!(!snapshot.snake.contains(&food));
    }

    #[test]
    fn test_wall_crash_records_score() {
        let settings = SnakeSettings {
            start_direction: Direction::Left,
            ..SnakeSettings::with_field(20, 20)
        };
        let mut session = SnakeSession::new_session(settings, 3, None).unwrap();
        session.place_food(Cell::new(19, 19));

        let mut snapshot = session.snapshot();
        for _ in 0..11 {
            snapshot = session.tick();
        }
        assert_eq!(snapshot.head(), Some(Cell::new(-1, 10)));
        assert_eq!(snapshot.status, GameStatus::GameOver(EndReason::OutOfBounds));
        assert_eq!(session.get_high_scores().len(), 1);
        assert_eq!(session.last_rank(), Some(0));
    }

    #[test]
    fn test_ticks_after_game_over_are_stable() {
        let mut session = session(10, 10);
        let over = crash_into_left_wall(&mut session);
        assert_eq!(session.tick(), over);
        assert_eq!(session.tick(), over);
        assert_eq!(session.get_high_scores().len(), 1);
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut session = session(20, 20);
        session.place_food(Cell::new(0, 0));
        session.handle_input(InputCommand::Pause);
        let paused = session.tick();
        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(session.tick(), paused);

        session.handle_input(InputCommand::Down);
        session.handle_input(InputCommand::Pause);
        let resumed = session.tick();
        assert_eq!(resumed.status, GameStatus::Running);
        assert_eq!(resumed.head(), Some(Cell::new(10, 11)));
    }

    #[test]
    fn test_restart_keeps_high_scores() {
        let mut session = session(10, 10);
        crash_into_left_wall(&mut session);
        session.handle_input(InputCommand::Restart);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.ticks, 0);
        assert_eq!(snapshot.snake, vec![Cell::new(5, 5)]);
        assert_eq!(session.get_high_scores().len(), 1);
        assert_eq!(session.last_rank(), None);
    }

    #[test]
    fn test_quit_is_terminal_until_restart() {
        let mut session = session(10, 10);
        crash_into_left_wall(&mut session);
        session.handle_input(InputCommand::Quit);
        assert_eq!(session.status(), GameStatus::Quit);

        session.handle_input(InputCommand::Pause);
        session.handle_input(InputCommand::Up);
        let snapshot = session.tick();
        assert_eq!(snapshot.status, GameStatus::Quit);

        session.handle_input(InputCommand::Restart);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_scores_are_saved_and_reloaded() {
        let store = HighScoreStore::new(Box::new(InMemoryContentProvider::new()));
        let mut first = SnakeSession::new_session(SnakeSettings::with_field(10, 10), 5, Some(store))
            .unwrap()
            .with_player_label(Some("  Grace "));
        crash_into_left_wall(&mut first);
        assert_eq!(first.get_high_scores()[0].label.as_deref(), Some("Grace"));

        let store = first.store.take().unwrap();
        let second =
            SnakeSession::new_session(SnakeSettings::with_field(10, 10), 6, Some(store)).unwrap();
        assert_eq!(second.get_high_scores(), first.get_high_scores());
    }

    #[test]
    fn test_unreadable_store_starts_empty() {
        let store = HighScoreStore::new(Box::new(InMemoryContentProvider::with_content("{{{")));
        let session =
            SnakeSession::new_session(SnakeSettings::with_field(10, 10), 5, Some(store)).unwrap();
        assert!(session.get_high_scores().is_empty());
    }

    #[test]
    fn test_unreadable_file_is_not_overwritten() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir()
            .join(format!("temp_snake_vibes_unreadable_{}.yaml", random_number));
        let content = "entries: [ {label: Ada, score: 500";
        std::fs::write(&path, content).unwrap();

        let store = HighScoreStore::from_yaml_file(path.clone());
        let mut session =
            SnakeSession::new_session(SnakeSettings::with_field(10, 10), 5, Some(store)).unwrap();
        crash_into_left_wall(&mut session);

        assert_eq!(session.get_high_scores().len(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_mixed_file_keeps_good_scores_after_game_over() {
        let content = r#"
entries:
  - label: Ada
    score: 500
    timestamp_ms: 1
  - label: Bob
    score: 400
    timestamp_ms: 2
  - score: -5
    timestamp_ms: 3
  - score: [1, 2]
"#;
        let store = HighScoreStore::new(Box::new(InMemoryContentProvider::with_content(content)));
        let mut session =
            SnakeSession::new_session(SnakeSettings::with_field(10, 10), 5, Some(store)).unwrap();
        assert_eq!(session.get_high_scores().len(), 3);

        crash_into_left_wall(&mut session);

        let reloaded = session.store.take().unwrap().load().unwrap();
        let scores: Vec<u32> = reloaded.entries().iter().map(|e| e.score).collect();
        assert_eq!(&scores[..2], &[500, 400]);
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn test_label_last_score_renames_and_saves() {
        let store = HighScoreStore::in_memory();
        let mut session =
            SnakeSession::new_session(SnakeSettings::with_field(10, 10), 5, Some(store)).unwrap();
        assert!(!session.label_last_score(Some("early")));

        crash_into_left_wall(&mut session);
        let rank = session.last_rank().unwrap();
        assert_eq!(session.get_high_scores()[rank].label.as_deref(), Some("early"));

        assert!(session.label_last_score(Some(" Margaret\t")));
        assert_eq!(session.get_high_scores()[rank].label.as_deref(), Some("Margaret"));

        let reloaded = session.store.take().unwrap().load().unwrap();
        assert_eq!(reloaded.entries()[rank].label.as_deref(), Some("Margaret"));
    }

    #[test]
    fn test_label_last_score_after_restart_is_refused() {
        let mut session = session(10, 10);
        crash_into_left_wall(&mut session);
        session.handle_input(InputCommand::Restart);
        assert!(!session.label_last_score(Some("late")));
        assert!(session.get_high_scores()[0].label.is_none());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = session(12, 12);
        let mut b = session(12, 12);
        for _ in 0..5 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
