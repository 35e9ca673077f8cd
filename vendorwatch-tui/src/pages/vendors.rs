use log::info;
use tabular::{Column, DataTable, RowAction, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, TextAlign};

use crate::data::{self, Vendor, VendorStatus};
use crate::pages::{status_span, Outcome};
use crate::route::Route;
use crate::theme::Theme;

pub struct VendorsPage {
    table: DataTable<Vendor>,
}

impl VendorsPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;
        let warning = theme.warning;

        let columns = vec![
            Column::field("name", "Vendor Name", 22),
            Column::field("email", "Email", 28),
            Column::field("category", "Category", 13),
            Column::field("products", "Products", 10).align(TextAlign::Right),
            Column::formatted("join_date", "Join Date", 14, |v: &Vendor| {
                Span::raw(data::short_date(v.join_date))
            }),
            Column::formatted("status", "Status", 10, move |v: &Vendor| {
                let color = match v.status {
                    VendorStatus::Active => success,
                    VendorStatus::Inactive => danger,
                    VendorStatus::Pending => warning,
                };
                status_span(v.status.label(), color)
            }),
            Column::actions(
                13,
                vec![RowAction::new("view", "view"), RowAction::new("delete", "del")],
            ),
        ];

        Self {
            table: DataTable::new(columns, data::vendors())
                .searchable("name", "Search vendors…")
                .page_size(8),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.table.handle_event(event)? {
            TableEvent::Action { id: "view", row } => {
                Some(Outcome::Goto(Route::VendorDetails(row.id)))
            }
            TableEvent::Action { id: "delete", row } => {
                info!("deleting vendor '{}'", row.name);
                self.table.retain(|v| v.id != row.id);
                None
            }
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.table.render(buf, area, &theme.table_style());
    }
}
