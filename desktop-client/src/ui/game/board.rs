use snake_common::{Cell, EndReason, GameSnapshot, GameStatus};

const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 34, 40);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 220, 110);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 170, 70);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 80, 70);

/// Draws the HUD, the field and the status line. `last_rank` is the table position of the
/// finished game's score; `name_entry` is the name being typed for it.
pub fn render_board(
    ui: &mut egui::Ui,
    snapshot: &GameSnapshot,
    best: Option<u32>,
    last_rank: Option<usize>,
    name_entry: Option<&str>,
) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            if let Some(best) = best {
                ui.add_space(20.0);
                ui.label(format!("Best: {}", best));
            }
            ui.add_space(20.0);
            ui.label(format!("Length: {}", snapshot.snake.len()));
        });
        ui.add_space(8.0);

        let width = snapshot.field_width;
        let height = snapshot.field_height;
        let available = ui.available_size();
        let cell_size = (available.x / width as f32)
            .min((available.y - 60.0) / height as f32)
            .max(4.0);
        let board_size = egui::vec2(cell_size * width as f32, cell_size * height as f32);

        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 4.0, BOARD_COLOR);

        let cell_rect = |cell: Cell| -> Option<egui::Rect> {
            if cell.x < 0 || cell.y < 0 || cell.x as usize >= width || cell.y as usize >= height {
                return None;
            }
            let min = origin + egui::vec2(cell.x as f32 * cell_size, cell.y as f32 * cell_size);
            Some(egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size)).shrink(1.0))
        };

        if let Some(rect) = snapshot.food.and_then(cell_rect) {
            painter.circle_filled(rect.center(), rect.width() / 2.0, FOOD_COLOR);
        }

        for (index, cell) in snapshot.snake.iter().enumerate() {
            let Some(rect) = cell_rect(*cell) else {
                continue;
            };
            let color = if index == 0 { HEAD_COLOR } else { BODY_COLOR };
            painter.rect_filled(rect, 2.0, color);
        }

        ui.add_space(10.0);
        render_status(ui, snapshot.status, last_rank, name_entry);
    });
}

fn render_status(
    ui: &mut egui::Ui,
    status: GameStatus,
    last_rank: Option<usize>,
    name_entry: Option<&str>,
) {
    match status {
        GameStatus::Running => {
            ui.label("Arrows/WASD to move, P to pause, H for high scores, Esc to quit");
        }
        GameStatus::Paused => {
            ui.label(
                egui::RichText::new("Paused")
                    .color(egui::Color32::YELLOW)
                    .size(24.0),
            );
            ui.label("Press P to resume");
        }
        GameStatus::GameOver(reason) => {
            let text = match reason {
                EndReason::BoardFull => "You filled the board!",
                EndReason::OutOfBounds => "Game Over: hit the wall",
                EndReason::SelfCollision => "Game Over: ran into yourself",
            };
            let color = if reason.is_win() {
                egui::Color32::GREEN
            } else {
                egui::Color32::RED
            };
            ui.label(egui::RichText::new(text).color(color).size(24.0));
            if let Some(rank) = last_rank {
                ui.label(
                    egui::RichText::new(format!("New high score #{}!", rank + 1))
                        .color(egui::Color32::GOLD),
                );
            }
            match name_entry {
                Some(name) => {
                    ui.label(egui::RichText::new(format!("Name: {}_", name)).monospace());
                    ui.label("Enter to save, Esc to skip");
                }
                None => {
                    ui.label("R to restart, H for high scores, Esc to quit");
                }
            }
        }
        GameStatus::Quit => {
            ui.label("Bye!");
        }
    }
}
