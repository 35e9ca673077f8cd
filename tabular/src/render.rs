//! Buffer rendering for [`DataTable`].

use termbuf::text::{align_offset, display_width, truncate_to_width};
use termbuf::{Buffer, Rect, Rgb, Style, TextAlign};

use crate::column::CellSource;
use crate::record::Record;
use crate::sort::Direction;
use crate::table::{DataTable, Geometry};

/// Resolved colors for one table instance. Callers usually build this
/// from their theme; the defaults are a readable dark palette.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub text: Rgb,
    pub muted: Rgb,
    pub header_fg: Rgb,
    pub header_bg: Rgb,
    pub cursor_fg: Rgb,
    pub cursor_bg: Rgb,
    pub accent: Rgb,
    pub search_bg: Rgb,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            text: Rgb::new(205, 214, 244),
            muted: Rgb::new(108, 112, 134),
            header_fg: Rgb::new(205, 214, 244),
            header_bg: Rgb::new(49, 50, 68),
            cursor_fg: Rgb::new(30, 30, 46),
            cursor_bg: Rgb::new(162, 119, 255),
            accent: Rgb::new(137, 180, 250),
            search_bg: Rgb::new(30, 30, 46),
        }
    }
}

impl<T: Record> DataTable<T> {
    /// Draw the table into `area`: search line, header with sort
    /// affordances, one page of body rows (or the no-results state), and
    /// the pager. Hit-test geometry is recorded as a side effect so the
    /// next mouse event can be routed.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, style: &TableStyle) {
        let mut geometry = Geometry {
            area,
            ..Default::default()
        };

        if area.is_empty() {
            self.layout = geometry;
            return;
        }

        let view = self.derive();
        let mut rest = area;

        if self.search_key.is_some() {
            let (line, below) = rest.split_top(1);
            self.render_search(buf, line, style);
            geometry.search = line;
            (_, rest) = below.split_top(1);
        }

        let (header, below) = rest.split_top(1);
        self.render_header(buf, header, style, &mut geometry);
        rest = below;

        let body_height = (self.page_size as u16).min(rest.height.saturating_sub(2));
        let (body, below) = rest.split_top(body_height);

        if view.visible.is_empty() {
            self.render_empty(buf, body, style);
        } else {
            for (offset, &row_index) in view.visible.iter().enumerate() {
                if offset as u16 >= body.height {
                    break;
                }
                let line = body.row(offset as u16);
                self.render_row(buf, line, row_index, offset, style, &mut geometry);
            }
        }

        let (_, below) = below.split_top(1);
        let (pager, _) = below.split_top(1);
        self.render_pager(buf, pager, &view, style, &mut geometry);

        self.layout = geometry;
    }

    fn render_search(&self, buf: &mut Buffer, line: Rect, style: &TableStyle) {
        if line.is_empty() {
            return;
        }
        buf.fill(line, Style::new().bg(style.search_bg));

        let prefix = "⌕ ";
        let prefix_width = buf.set_text(
            line.x,
            line.y,
            prefix,
            line.width,
            Style::new().fg(style.muted),
        );

        let text_area = line.shrink(0, 0, 0, prefix_width);
        if self.search.is_empty() {
            buf.set_text(
                text_area.x,
                text_area.y,
                &self.placeholder,
                text_area.width,
                Style::new().fg(style.muted).italic(),
            );
        } else {
            buf.set_text(
                text_area.x,
                text_area.y,
                self.search.text(),
                text_area.width,
                Style::new().fg(style.text),
            );
        }

        // Block cursor over the character at the edit position.
        let before: String = self.search.text().chars().take(self.search.cursor()).collect();
        let cursor_x = text_area.x + display_width(&before) as u16;
        if cursor_x < text_area.right() {
            if let Some(cell) = buf.get_mut(cursor_x, text_area.y) {
                cell.bg = style.accent;
                cell.fg = style.search_bg;
            }
        }
    }

    fn render_header(
        &self,
        buf: &mut Buffer,
        line: Rect,
        style: &TableStyle,
        geometry: &mut Geometry,
    ) {
        if line.is_empty() {
            return;
        }
        buf.fill(line, Style::new().bg(style.header_bg));

        let sort = self.state.sort();
        let mut x = line.x;
        for (index, column) in self.columns.iter().enumerate() {
            if x >= line.right() {
                break;
            }
            let visible_width = column.width.min(line.right() - x);

            // Indicator placement depends on alignment so the header text
            // does not shift when the sort changes sides.
            let text = match sort {
                Some((key, direction)) if Some(key) == column.sort_key() => {
                    let indicator = match direction {
                        Direction::Asc => "▲",
                        Direction::Desc => "▼",
                    };
                    match column.align {
                        TextAlign::Left => format!("{} {}", column.header, indicator),
                        TextAlign::Center | TextAlign::Right => {
                            format!("{} {}", indicator, column.header)
                        }
                    }
                }
                _ => column.header.clone(),
            };

            let content_width = visible_width.saturating_sub(1) as usize;
            let text = truncate_to_width(&text, content_width);
            let offset = align_offset(display_width(&text), content_width, column.align) as u16;
            buf.set_text(
                x + offset,
                line.y,
                &text,
                visible_width,
                Style::new().fg(style.header_fg).bold(),
            );

            geometry
                .header_cells
                .push((Rect::new(x, line.y, visible_width, 1), index));
            x += column.width;
        }
    }

    fn render_row(
        &self,
        buf: &mut Buffer,
        line: Rect,
        row_index: usize,
        page_offset: usize,
        style: &TableStyle,
        geometry: &mut Geometry,
    ) {
        if line.is_empty() {
            return;
        }
        let row = &self.rows[row_index];
        let focused = self.cursor == Some(page_offset);

        if focused {
            buf.fill(line, Style::new().bg(style.cursor_bg));
        }
        geometry.rows.push((line, page_offset));

        let mut x = line.x;
        for column in &self.columns {
            if x >= line.right() {
                break;
            }
            let visible_width = column.width.min(line.right() - x);
            let content_width = visible_width.saturating_sub(1) as usize;

            if let CellSource::Actions(actions) = &column.source {
                let mut action_x = x;
                for action in actions {
                    let label_width = display_width(action.label) as u16;
                    if action_x + label_width > x + visible_width {
                        break;
                    }
                    let fg = if focused { style.cursor_fg } else { style.accent };
                    buf.set_text(
                        action_x,
                        line.y,
                        action.label,
                        label_width,
                        Style::new().fg(fg).underline(),
                    );
                    geometry.actions.push((
                        Rect::new(action_x, line.y, label_width, 1),
                        page_offset,
                        *action,
                    ));
                    action_x += label_width + 2;
                }
            } else {
                let span = column.cell(row);
                let text = truncate_to_width(&span.text, content_width);
                let offset = align_offset(display_width(&text), content_width, column.align) as u16;
                let fg = if focused {
                    style.cursor_fg
                } else {
                    span.style.fg.unwrap_or(style.text)
                };
                let mut cell_style = Style::new().fg(fg);
                cell_style.text = span.style.text;
                buf.set_text(x + offset, line.y, &text, visible_width, cell_style);
            }

            x += column.width;
        }
    }

    fn render_empty(&self, buf: &mut Buffer, body: Rect, style: &TableStyle) {
        if body.is_empty() {
            return;
        }
        let message = "No results";
        let line = body.row(body.height / 2);
        let offset =
            align_offset(display_width(message), line.width as usize, TextAlign::Center) as u16;
        buf.set_text(
            line.x + offset,
            line.y,
            message,
            line.width,
            Style::new().fg(style.muted).italic(),
        );
    }

    fn render_pager(
        &self,
        buf: &mut Buffer,
        line: Rect,
        view: &crate::table::DerivedView,
        style: &TableStyle,
        geometry: &mut Geometry,
    ) {
        if line.is_empty() {
            return;
        }

        let total = self.rows.len();
        let summary = if view.filtered() < total {
            format!("{} of {} rows", view.filtered(), total)
        } else {
            format!("{total} rows")
        };
        buf.set_text(
            line.x,
            line.y,
            &summary,
            line.width,
            Style::new().fg(style.muted),
        );

        let pages = view.total_pages.max(1);
        let prev_label = "‹ Prev";
        let next_label = "Next ›";
        let middle = format!("  Page {} of {}  ", view.page, pages);

        let controls_width =
            (display_width(prev_label) + display_width(&middle) + display_width(next_label)) as u16;
        if controls_width > line.width {
            return;
        }
        let mut x = line.right() - controls_width;

        let prev_style = if view.page > 1 {
            Style::new().fg(style.accent)
        } else {
            Style::new().fg(style.muted).dim()
        };
        let width = buf.set_text(x, line.y, prev_label, line.right() - x, prev_style);
        geometry.prev = Rect::new(x, line.y, width, 1);
        x += width;

        x += buf.set_text(
            x,
            line.y,
            &middle,
            line.right() - x,
            Style::new().fg(style.text),
        );

        let next_style = if view.page < pages {
            Style::new().fg(style.accent)
        } else {
            Style::new().fg(style.muted).dim()
        };
        let width = buf.set_text(x, line.y, next_label, line.right() - x, next_style);
        geometry.next = Rect::new(x, line.y, width, 1);
    }
}
