//! A labelled horizontal bar chart.

use termbuf::text::display_width;
use termbuf::{Buffer, Rect, Style};

use crate::theme::Theme;

pub struct BarChart {
    pub title: &'static str,
    pub data: Vec<(&'static str, i64)>,
}

impl BarChart {
    pub fn new(title: &'static str, data: Vec<(&'static str, i64)>) -> Self {
        Self { title, data }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if area.is_empty() {
            return;
        }

        let title_line = area.row(0);
        buf.set_text(
            title_line.x,
            title_line.y,
            self.title,
            title_line.width,
            Style::new().fg(theme.text).bold(),
        );

        let max = self.data.iter().map(|(_, v)| *v).max().unwrap_or(0);
        if max <= 0 {
            return;
        }

        let label_width: u16 = 4;
        let value_width = display_width(&max.to_string()) as u16 + 1;
        let bar_width = area.width.saturating_sub(label_width + value_width + 1);

        for (offset, (label, value)) in self.data.iter().enumerate() {
            let line = area.row(offset as u16 + 1);
            if line.is_empty() {
                break;
            }

            buf.set_text(line.x, line.y, label, label_width, Style::new().fg(theme.muted));

            let filled = ((*value as f64 / max as f64) * bar_width as f64).round() as u16;
            let bar: String = "▇".repeat(filled as usize);
            buf.set_text(
                line.x + label_width,
                line.y,
                &bar,
                bar_width,
                Style::new().fg(theme.accent),
            );

            let value_text = value.to_string();
            buf.set_text(
                line.x + label_width + bar_width + 1,
                line.y,
                &value_text,
                value_width,
                Style::new().fg(theme.muted),
            );
        }
    }
}
