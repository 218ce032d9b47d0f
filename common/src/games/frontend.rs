use crate::highscores::HighScoreEntry;
use super::snake::{GameSnapshot, InputCommand, SnakeSession};

/// Where player commands come from: keyboard, a channel, a script.
pub trait InputSource {
    fn poll_commands(&mut self) -> Vec<InputCommand>;
}

/// Receives every frame the session produces.
pub trait FrameRenderer {
    fn render(&mut self, snapshot: &GameSnapshot, high_scores: &[HighScoreEntry]);
}

/// One pass of the shell loop: apply queued commands in order, advance the game if the shell's
/// timer fired, then render.
pub fn drive_frame(
    session: &mut SnakeSession,
    input: &mut impl InputSource,
    renderer: &mut impl FrameRenderer,
    tick_due: bool,
) -> GameSnapshot {
    for command in input.poll_commands() {
        session.handle_input(command);
    }

    let snapshot = if tick_due {
        session.tick()
    } else {
        session.snapshot()
    };

    renderer.render(&snapshot, session.get_high_scores());
    snapshot
}
