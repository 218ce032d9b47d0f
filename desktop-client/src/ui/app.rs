use snake_common::{GameStatus, InputCommand};
use crate::command_sender::CommandSender;
use crate::state::{ClientCommand, Frame, SharedState};

use super::game::{render_board, render_high_scores};
use super::input::{ShellAction, pressed_actions};
use super::name_entry::{NameEntry, NameEntryEvent, apply_events};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Play,
    HighScores { back_to: ReturnScreen },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnScreen {
    Start,
    Play,
}

/// Name prompt for a finished game whose score made the table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NamePrompt {
    Idle,
    Editing(NameEntry),
    Closed,
}

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    player_label: Option<String>,
    screen: Screen,
    name_prompt: NamePrompt,
    shutdown_sent: bool,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        player_label: Option<String>,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            player_label,
            screen: Screen::Start,
            name_prompt: NamePrompt::Idle,
            shutdown_sent: false,
        }
    }

    fn handle_actions(&mut self, actions: &[ShellAction], frame: Option<&Frame>) {
        let status = frame.map(|f| f.snapshot.status);

        for action in actions {
            match (self.screen, *action) {
                (Screen::Start, ShellAction::Start) => {
                    self.command_sender.send_input(InputCommand::Restart);
                    self.screen = Screen::Play;
                }
                (Screen::Start, ShellAction::ToggleHighScores) => {
                    self.screen = Screen::HighScores { back_to: ReturnScreen::Start };
                }
                (Screen::Start, ShellAction::Game(InputCommand::Quit)) => {
                    self.command_sender.send_input(InputCommand::Quit);
                }
                (Screen::Start, ShellAction::Game(_)) => {}

                (Screen::Play, ShellAction::ToggleHighScores) => {
                    if status.is_some_and(|s| s.is_running()) {
                        self.command_sender.send_input(InputCommand::Pause);
                    }
                    self.screen = Screen::HighScores { back_to: ReturnScreen::Play };
                }
                (Screen::Play, ShellAction::Start) => {
                    if status.is_some_and(|s| s.is_over()) {
                        self.command_sender.send_input(InputCommand::Restart);
                    }
                }
                (Screen::Play, ShellAction::Game(command)) => {
                    self.command_sender.send_input(command);
                }

                (Screen::HighScores { back_to }, ShellAction::ToggleHighScores)
                | (Screen::HighScores { back_to }, ShellAction::Game(InputCommand::Quit)) => {
                    self.screen = match back_to {
                        ReturnScreen::Start => Screen::Start,
                        ReturnScreen::Play => Screen::Play,
                    };
                }
                (Screen::HighScores { .. }, _) => {}
            }
        }
    }

    fn update_name_prompt(&mut self, status: Option<GameStatus>, last_rank: Option<usize>) {
        match status {
            Some(GameStatus::GameOver(_)) => {
                if self.name_prompt == NamePrompt::Idle
                    && self.screen == Screen::Play
                    && last_rank.is_some()
                {
                    let entry = NameEntry::new(self.player_label.as_deref());
                    self.name_prompt = NamePrompt::Editing(entry);
                }
            }
            Some(GameStatus::Running) | Some(GameStatus::Paused) => {
                self.name_prompt = NamePrompt::Idle;
            }
            Some(GameStatus::Quit) | None => {}
        }
    }

    /// Returns `true` while the prompt owns the keyboard.
    fn handle_name_entry(&mut self, ctx: &egui::Context) -> bool {
        let NamePrompt::Editing(ref mut entry) = self.name_prompt else {
            return false;
        };

        match ctx.input(|i| apply_events(entry, &i.events)) {
            Some(NameEntryEvent::Submit) => {
                let label = entry.submit();
                self.command_sender
                    .send(ClientCommand::LabelLastScore(label.clone()));
                self.player_label = label;
                self.name_prompt = NamePrompt::Closed;
            }
            Some(NameEntryEvent::Cancel) => self.name_prompt = NamePrompt::Closed,
            None => {}
        }
        true
    }

    fn render_start(&self, ui: &mut egui::Ui, frame: Option<&Frame>) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(egui::RichText::new("Snake Vibes").size(40.0));
            ui.add_space(20.0);

            if let Some(ref label) = self.player_label {
                ui.label(format!("Player: {}", label));
            }
            if let Some(best) = frame.and_then(|f| f.high_scores.first()) {
                ui.label(format!("Best: {} by {}", best.score, best.display_label()));
            }

            ui.add_space(20.0);
            ui.label("Press Enter or Space to start");
            ui.label("H for high scores, Esc to quit");
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_sent {
            self.command_sender.send(ClientCommand::Shutdown);
            self.shutdown_sent = true;
        }

        let frame = self.shared_state.get_frame();
        let last_rank = self.shared_state.get_last_rank();
        self.update_name_prompt(frame.as_ref().map(|f| f.snapshot.status), last_rank);

        if !self.handle_name_entry(ctx) {
            let actions = pressed_actions(ctx);
            self.handle_actions(&actions, frame.as_ref());
        }

        if frame.as_ref().is_some_and(|f| f.snapshot.status == GameStatus::Quit) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| match (self.screen, frame.as_ref()) {
            (Screen::Start, _) => self.render_start(ui, frame.as_ref()),
            (Screen::HighScores { .. }, Some(f)) => render_high_scores(ui, &f.high_scores),
            (Screen::HighScores { .. }, None) => render_high_scores(ui, &[]),
            (Screen::Play, Some(f)) => {
                let best = f.high_scores.first().map(|e| e.score);
                let name = match self.name_prompt {
                    NamePrompt::Editing(ref entry) => Some(entry.text()),
                    _ => None,
                };
                render_board(ui, &f.snapshot, best, last_rank, name);
            }
            (Screen::Play, None) => {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for game state...");
                });
            }
        });
    }
}
