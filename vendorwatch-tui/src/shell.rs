//! Page chrome: sidebar navigation and the page header.

use termbuf::{Buffer, Rect, Style};

use crate::route::{Route, SECTIONS};
use crate::theme::Theme;

const SIDEBAR_WIDTH: u16 = 20;
const HEADER_HEIGHT: u16 = 4;

pub struct Shell {
    items: Vec<(Rect, Route)>,
}

impl Shell {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Draw the chrome and return the content area for the routed page.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, route: Route, theme: &Theme) -> Rect {
        buf.fill(area, Style::new().bg(theme.background).fg(theme.text));

        let (sidebar, main) = area.split_left(SIDEBAR_WIDTH);
        self.render_sidebar(buf, sidebar, route, theme);

        let (header, content) = main.split_top(HEADER_HEIGHT);
        self.render_header(buf, header, route, theme);

        content.shrink(0, 1, 1, 2)
    }

    fn render_sidebar(&mut self, buf: &mut Buffer, area: Rect, route: Route, theme: &Theme) {
        self.items.clear();
        if area.is_empty() {
            return;
        }
        buf.fill(area, Style::new().bg(theme.surface));

        buf.set_text(
            area.x + 2,
            area.y + 1,
            "VendorWatch",
            area.width.saturating_sub(2),
            Style::new().fg(theme.primary).bold(),
        );

        let active = route.section();
        for (index, section) in SECTIONS.iter().enumerate() {
            let line = area.row(3 + index as u16);
            if line.is_empty() {
                break;
            }
            if *section == active {
                buf.fill(line, Style::new().bg(theme.background));
                buf.set_text(line.x, line.y, "▎", 1, Style::new().fg(theme.primary));
            }
            let fg = if *section == active {
                theme.primary
            } else {
                theme.muted
            };
            buf.set_text(
                line.x + 2,
                line.y,
                section.title(),
                line.width.saturating_sub(2),
                Style::new().fg(fg),
            );
            self.items.push((line, *section));
        }

        if area.height > 3 {
            let hints = area.row(area.height - 2);
            buf.set_text(
                hints.x + 2,
                hints.y,
                "Tab · ^Q quit",
                hints.width.saturating_sub(2),
                Style::new().fg(theme.muted).dim(),
            );
        }
    }

    fn render_header(&self, buf: &mut Buffer, area: Rect, route: Route, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let title = area.row(1);
        buf.set_text(
            title.x + 2,
            title.y,
            route.title(),
            title.width.saturating_sub(2),
            Style::new().fg(theme.text).bold(),
        );
        let subtitle = area.row(2);
        buf.set_text(
            subtitle.x + 2,
            subtitle.y,
            route.subtitle(),
            subtitle.width.saturating_sub(2),
            Style::new().fg(theme.muted),
        );
    }

    /// The sidebar section under a click, if any.
    pub fn route_at(&self, x: u16, y: u16) -> Option<Route> {
        self.items
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, route)| *route)
    }
}
