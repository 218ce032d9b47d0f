use snake_common::highscores::{MAX_LABEL_CHARS, sanitize_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEntryEvent {
    Submit,
    Cancel,
}

/// Name typed on the game-over screen for a score that made the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    text: String,
}

impl NameEntry {
    pub fn new(initial: Option<&str>) -> Self {
        let mut entry = Self::default();
        if let Some(initial) = initial {
            entry.push_str(initial);
        }
        entry
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends printable characters until the label limit is reached.
    pub fn push_str(&mut self, input: &str) {
        for c in input.chars().filter(|c| !c.is_control()) {
            if self.text.chars().count() >= MAX_LABEL_CHARS {
                break;
            }
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// The label to store. Blank input stores no label.
    pub fn submit(&self) -> Option<String> {
        sanitize_label(&self.text)
    }
}

/// Feeds one frame of egui events into `entry`. Stops at the first Enter or Esc.
pub fn apply_events(entry: &mut NameEntry, events: &[egui::Event]) -> Option<NameEntryEvent> {
    for event in events {
        match event {
            egui::Event::Text(text) => entry.push_str(text),
            egui::Event::Key {
                key: egui::Key::Backspace,
                pressed: true,
                ..
            } => entry.backspace(),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                repeat: false,
                ..
            } => return Some(NameEntryEvent::Submit),
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                repeat: false,
                ..
            } => return Some(NameEntryEvent::Cancel),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn text(s: &str) -> egui::Event {
        egui::Event::Text(s.to_string())
    }

    #[test]
    fn test_typing_stops_at_label_limit() {
        let mut entry = NameEntry::new(None);
        entry.push_str("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(entry.text(), "abcdefghijklmnop");
        assert_eq!(entry.text().chars().count(), MAX_LABEL_CHARS);
    }

    #[test]
    fn test_prefill_is_truncated_and_control_chars_dropped() {
        let entry = NameEntry::new(Some("Ada\nLovelace-Byron-King"));
        assert_eq!(entry.text(), "AdaLovelace-Byro");
    }

    #[test]
    fn test_backspace_then_enter_submits() {
        let mut entry = NameEntry::new(Some("Adx"));
        let events = [
            key(egui::Key::Backspace),
            text("a"),
            key(egui::Key::Enter),
            text("ignored"),
        ];

        assert_eq!(apply_events(&mut entry, &events), Some(NameEntryEvent::Submit));
        assert_eq!(entry.submit(), Some("Ada".to_string()));
    }

    #[test]
    fn test_backspace_on_empty_is_harmless() {
        let mut entry = NameEntry::new(None);
        assert_eq!(apply_events(&mut entry, &[key(egui::Key::Backspace)]), None);
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_escape_cancels() {
        let mut entry = NameEntry::new(None);
        assert_eq!(
            apply_events(&mut entry, &[text("Bo"), key(egui::Key::Escape)]),
            Some(NameEntryEvent::Cancel)
        );
        assert_eq!(entry.text(), "Bo");
    }

    #[test]
    fn test_blank_submit_has_no_label() {
        let mut entry = NameEntry::new(None);
        entry.push_str("   ");
        assert_eq!(entry.submit(), None);
    }
}
