use termbuf::{Buffer, Event, Rect, Style};

use crate::pages::Outcome;
use crate::theme::Theme;

/// Display-only account preferences. Nothing here is persisted, so the
/// page has no editing surface.
pub struct SettingsPage;

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&mut self, _event: &Event) -> Option<Outcome> {
        None
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let heading = Style::new().fg(theme.text).bold();
        let label = Style::new().fg(theme.muted);
        let value = Style::new().fg(theme.text);

        let sections: [(&str, &[(&str, &str)]); 3] = [
            (
                "General",
                &[
                    ("Full Name", "Admin User"),
                    ("Email", "admin@vendorwatch.com"),
                    ("Language", "English"),
                ],
            ),
            (
                "Notifications",
                &[
                    ("Email notifications", "on"),
                    ("Weekly summary", "on"),
                    ("Product alerts", "off"),
                ],
            ),
            ("Appearance", &[("Theme", "Dark")]),
        ];

        let mut y = 0u16;
        for (title, entries) in sections {
            let line = area.row(y);
            if line.is_empty() {
                break;
            }
            buf.set_text(line.x, line.y, title, line.width, heading);
            y += 1;

            for (name, text) in entries {
                let line = area.row(y);
                if line.is_empty() {
                    break;
                }
                buf.set_text(line.x + 2, line.y, name, 22, label);
                buf.set_text(line.x + 25, line.y, text, line.width.saturating_sub(25), value);
                y += 1;
            }
            y += 1;
        }
    }
}
