use snake_common::games::FrameRenderer;
use snake_common::{GameSnapshot, HighScoreEntry};
use crate::state::{Frame, SharedState};

#[derive(Clone)]
pub struct SharedStateRenderer {
    shared_state: SharedState,
}

impl SharedStateRenderer {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl FrameRenderer for SharedStateRenderer {
    fn render(&mut self, snapshot: &GameSnapshot, high_scores: &[HighScoreEntry]) {
        self.shared_state.set_frame(Frame {
            snapshot: snapshot.clone(),
            high_scores: high_scores.to_vec(),
        });
    }
}
