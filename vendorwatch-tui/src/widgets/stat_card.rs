//! Stat cards: a labelled headline number with an optional delta badge.

use termbuf::text::display_width;
use termbuf::{Buffer, Rect, Style};

use crate::theme::Theme;

pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Delta label and whether it is an improvement, e.g. ("12%", true).
    pub change: Option<(&'static str, bool)>,
    pub footer: &'static str,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            change: None,
            footer: "",
        }
    }

    pub fn change(mut self, delta: &'static str, positive: bool) -> Self {
        self.change = Some((delta, positive));
        self
    }

    pub fn footer(mut self, footer: &'static str) -> Self {
        self.footer = footer;
        self
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        buf.fill(area, Style::new().bg(theme.surface));
        let inner = area.shrink(0, 1, 0, 1);

        let title_line = inner.row(0);
        buf.set_text(
            title_line.x,
            title_line.y,
            self.title,
            title_line.width,
            Style::new().fg(theme.muted),
        );

        let value_line = inner.row(1);
        buf.set_text(
            value_line.x,
            value_line.y,
            &self.value,
            value_line.width,
            Style::new().fg(theme.text).bold(),
        );

        if let Some((delta, positive)) = self.change {
            let badge = if positive {
                format!("+{delta}")
            } else {
                format!("-{delta}")
            };
            let badge_width = display_width(&badge) as u16;
            if badge_width < value_line.width {
                let color = if positive { theme.success } else { theme.danger };
                buf.set_text(
                    value_line.right() - badge_width,
                    value_line.y,
                    &badge,
                    badge_width,
                    Style::new().fg(color).bold(),
                );
            }
        }

        let footer_line = inner.row(2);
        buf.set_text(
            footer_line.x,
            footer_line.y,
            self.footer,
            footer_line.width,
            Style::new().fg(theme.muted).dim(),
        );
    }
}

/// Lay a set of cards out in one row with even widths and a one-column
/// gap between them.
pub fn render_card_row(cards: &[StatCard], buf: &mut Buffer, area: Rect, theme: &Theme) {
    if cards.is_empty() || area.is_empty() {
        return;
    }
    let gaps = (cards.len() - 1) as u16;
    let card_width = area.width.saturating_sub(gaps) / cards.len() as u16;
    if card_width == 0 {
        return;
    }

    let mut x = area.x;
    for card in cards {
        card.render(buf, Rect::new(x, area.y, card_width, area.height), theme);
        x += card_width + 1;
    }
}
