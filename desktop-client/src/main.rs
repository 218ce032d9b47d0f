mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;
use clap::Parser;
use tokio::sync::mpsc;
use snake_common::config::Validate;
use snake_common::logger::init_logger;
use snake_common::{HighScoreStore, InputCommand, SnakeSession, log, log_warn};

use command_sender::CommandSender;
use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use offline::local_game_task;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-player snake", long_about = None)]
struct Args {
    /// Path to the YAML config file. Created with defaults if missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Name stored with high scores
    #[arg(long)]
    name: Option<String>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.game.field_width = width;
        }
        if let Some(height) = self.height {
            config.game.field_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }
        if let Some(ref name) = self.name {
            config.player_name = Some(name.clone());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("snake_vibes".to_string())
    } else {
        None
    };
    init_logger(prefix);

    let mut config = get_config_manager(&args.config)
        .get_or_create_config()
        .inspect_err(|e| log_warn!("Invalid config {}: {}", args.config.display(), e))?;
    args.apply_overrides(&mut config);
    config
        .validate()
        .inspect_err(|e| log_warn!("Invalid settings: {}", e))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let store = HighScoreStore::from_yaml_file(&config.high_scores.location);
    let mut session = SnakeSession::new_session(config.game.clone(), seed, Some(store))?
        .with_player_label(config.player_name.as_deref());
    // Hold the first game on the start screen.
    session.handle_input(InputCommand::Pause);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(local_game_task(session, shared_state_clone, command_rx)),
            Err(e) => log_warn!("Failed to start game runtime: {}", e),
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_title("Snake Vibes"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    let shutdown_sender = command_sender.clone();
    let player_label = config.player_name.clone();

    eframe::run_native(
        "Snake Vibes",
        options,
        Box::new(|_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_sender,
                player_label,
            )))
        }),
    )?;

    shutdown_sender.send(state::ClientCommand::Shutdown);
    if game_thread.join().is_err() {
        log_warn!("Game thread panicked");
    }
    log!("Bye");

    Ok(())
}
