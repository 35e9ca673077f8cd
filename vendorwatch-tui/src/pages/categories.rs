use log::info;
use tabular::{Column, DataTable, RowAction, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, Style, TextAlign};

use crate::data::{self, Category, CategoryStatus};
use crate::pages::{status_span, Outcome};
use crate::theme::Theme;

pub struct CategoriesPage {
    table: DataTable<Category>,
}

impl CategoriesPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;
        let muted = theme.muted;

        let columns = vec![
            Column::field("name", "Category Name", 16),
            Column::formatted("slug", "Slug", 14, move |c: &Category| {
                Span::styled(c.slug, Style::new().fg(muted))
            }),
            Column::field("description", "Description", 30),
            Column::field("products", "Products", 10).align(TextAlign::Right),
            Column::field("vendors", "Vendors", 9).align(TextAlign::Right),
            Column::formatted("status", "Status", 10, move |c: &Category| {
                let color = match c.status {
                    CategoryStatus::Active => success,
                    CategoryStatus::Inactive => danger,
                };
                status_span(c.status.label(), color)
            }),
            Column::actions(7, vec![RowAction::new("delete", "del")]),
        ];

        Self {
            table: DataTable::new(columns, data::categories())
                .searchable("name", "Search categories…")
                .page_size(8),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.table.handle_event(event)? {
            TableEvent::Action { id: "delete", row } => {
                info!("deleting category '{}'", row.name);
                self.table.retain(|c| c.id != row.id);
                None
            }
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.table.render(buf, area, &theme.table_style());
    }
}
