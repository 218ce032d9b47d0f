use std::sync::{Arc, Mutex};
use snake_common::{GameSnapshot, HighScoreEntry, InputCommand};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    Input(InputCommand),
    /// Name for the score recorded by the last finished game.
    LabelLastScore(Option<String>),
    Shutdown,
}

/// The latest rendered frame, as published by the game task.
#[derive(Debug, Clone)]
pub struct Frame {
    pub snapshot: GameSnapshot,
    pub high_scores: Vec<HighScoreEntry>,
}

pub struct SharedState {
    frame: Arc<Mutex<Option<Frame>>>,
    last_rank: Arc<Mutex<Option<usize>>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(None)),
            last_rank: Arc::new(Mutex::new(None)),
            ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_frame(&self, frame: Frame) {
        *self.frame.lock().unwrap() = Some(frame);
        self.request_repaint();
    }

    pub fn get_frame(&self) -> Option<Frame> {
        self.frame.lock().unwrap().clone()
    }

    /// Table position of the last finished game's score, if it made the table.
    pub fn set_last_rank(&self, rank: Option<usize>) {
        let mut current = self.last_rank.lock().unwrap();
        if *current != rank {
            *current = rank;
            drop(current);
            self.request_repaint();
        }
    }

    pub fn get_last_rank(&self) -> Option<usize> {
        *self.last_rank.lock().unwrap()
    }

    pub fn has_context(&self) -> bool {
        self.ctx.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.ctx.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.ctx.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            frame: Arc::clone(&self.frame),
            last_rank: Arc::clone(&self.last_rank),
            ctx: Arc::clone(&self.ctx),
        }
    }
}
