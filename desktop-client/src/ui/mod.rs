mod app;
mod game;
mod input;
mod name_entry;

pub use app::SnakeApp;
