mod channel_input;
mod local_game;
mod renderer;

pub use channel_input::ChannelInput;
pub use local_game::local_game_task;
pub use renderer::SharedStateRenderer;
