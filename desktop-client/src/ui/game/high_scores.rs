use chrono::{Local, TimeZone};
use snake_common::HighScoreEntry;

pub fn render_high_scores(ui: &mut egui::Ui, entries: &[HighScoreEntry]) {
    ui.vertical_centered(|ui| {
        ui.heading("High Scores");
        ui.add_space(10.0);

        if entries.is_empty() {
            ui.label("No scores yet");
        } else {
            egui::Grid::new("high_scores")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    ui.strong("#");
                    ui.strong("Player");
                    ui.strong("Score");
                    ui.strong("Date");
                    ui.end_row();

                    for (index, entry) in entries.iter().enumerate() {
                        ui.label(format!("{}", index + 1));
                        ui.label(entry.display_label());
                        ui.label(entry.score.to_string());
                        ui.label(format_timestamp(entry.timestamp_ms));
                        ui.end_row();
                    }
                });
        }

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("Press H or Esc to go back")
                .color(egui::Color32::GRAY),
        );
    });
}

fn format_timestamp(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}
