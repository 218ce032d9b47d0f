mod frontend;
mod session_rng;

pub mod snake;

pub use frontend::{FrameRenderer, InputSource, drive_frame};
pub use session_rng::SessionRng;
