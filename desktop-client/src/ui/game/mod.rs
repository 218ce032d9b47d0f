mod board;
mod high_scores;

pub use board::render_board;
pub use high_scores::render_high_scores;
