use snake_common::InputCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Game(InputCommand),
    Start,
    ToggleHighScores,
}

pub fn map_key(key: egui::Key) -> Option<ShellAction> {
    let action = match key {
        egui::Key::ArrowUp | egui::Key::W => ShellAction::Game(InputCommand::Up),
        egui::Key::ArrowDown | egui::Key::S => ShellAction::Game(InputCommand::Down),
        egui::Key::ArrowLeft | egui::Key::A => ShellAction::Game(InputCommand::Left),
        egui::Key::ArrowRight | egui::Key::D => ShellAction::Game(InputCommand::Right),
        egui::Key::P => ShellAction::Game(InputCommand::Pause),
        egui::Key::R => ShellAction::Game(InputCommand::Restart),
        egui::Key::Escape => ShellAction::Game(InputCommand::Quit),
        egui::Key::Enter | egui::Key::Space => ShellAction::Start,
        egui::Key::H => ShellAction::ToggleHighScores,
        _ => return None,
    };
    Some(action)
}

/// Fresh key presses of this frame, in arrival order. Auto-repeat is dropped.
pub fn pressed_actions(ctx: &egui::Context) -> Vec<ShellAction> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => map_key(*key),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_same_direction() {
        assert_eq!(map_key(egui::Key::ArrowUp), map_key(egui::Key::W));
        assert_eq!(map_key(egui::Key::ArrowDown), map_key(egui::Key::S));
        assert_eq!(map_key(egui::Key::ArrowLeft), map_key(egui::Key::A));
        assert_eq!(
            map_key(egui::Key::ArrowRight),
            Some(ShellAction::Game(InputCommand::Right))
        );
    }

    #[test]
    fn test_shell_keys() {
        assert_eq!(map_key(egui::Key::P), Some(ShellAction::Game(InputCommand::Pause)));
        assert_eq!(map_key(egui::Key::R), Some(ShellAction::Game(InputCommand::Restart)));
        assert_eq!(map_key(egui::Key::Escape), Some(ShellAction::Game(InputCommand::Quit)));
        assert_eq!(map_key(egui::Key::Enter), Some(ShellAction::Start));
        assert_eq!(map_key(egui::Key::Space), Some(ShellAction::Start));
        assert_eq!(map_key(egui::Key::H), Some(ShellAction::ToggleHighScores));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(map_key(egui::Key::Q), None);
        assert_eq!(map_key(egui::Key::F1), None);
    }
}
