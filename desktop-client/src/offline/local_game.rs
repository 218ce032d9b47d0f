use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use snake_common::games::{FrameRenderer, drive_frame};
use snake_common::{GameStatus, SnakeSession, log};
use crate::state::{ClientCommand, SharedState};

use super::{ChannelInput, SharedStateRenderer};

/// Owns the session for the lifetime of the window. Ticks and UI commands are
/// serialized through one select loop.
pub async fn local_game_task(
    mut session: SnakeSession,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let mut input = ChannelInput::new(command_rx);
    let mut renderer = SharedStateRenderer::new(shared_state.clone());

    let mut interval = tokio::time::interval(session.settings().tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await;

    drive_frame(&mut session, &mut input, &mut renderer, false);

    loop {
        let tick_due = tokio::select! {
            _ = interval.tick() => true,
            open = input.wait() => {
                if !open {
                    break;
                }
                false
            }
        };

        let snapshot = drive_frame(&mut session, &mut input, &mut renderer, tick_due);
        if let Some(label) = input.take_label()
            && session.label_last_score(label.as_deref())
        {
            renderer.render(&snapshot, session.get_high_scores());
        }
        shared_state.set_last_rank(session.last_rank());

        if snapshot.status == GameStatus::Quit || input.is_closed() {
            break;
        }
    }

    log!("Local game task finished");
}
