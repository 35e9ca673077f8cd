use tabular::{Column, DataTable, RowAction, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, Style, TextAlign};

use crate::data::{self, Product, StockStatus, Vendor, VendorStatus};
use crate::pages::{status_span, Outcome};
use crate::route::Route;
use crate::theme::Theme;

pub struct VendorDetailsPage {
    vendor: Option<Vendor>,
    products: DataTable<Product>,
}

impl VendorDetailsPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;

        let columns = vec![
            Column::field("name", "Product Name", 22),
            Column::field("sku", "SKU", 8),
            Column::formatted("price", "Price", 9, |p: &Product| Span::raw(data::dollars(p.price)))
                .align(TextAlign::Right),
            Column::field("stock", "Stock", 7).align(TextAlign::Right),
            Column::formatted("status", "Status", 14, move |p: &Product| {
                let color = match p.status {
                    StockStatus::InStock => success,
                    StockStatus::OutOfStock => danger,
                };
                status_span(p.status.label(), color)
            }),
            Column::actions(6, vec![RowAction::new("view", "view")]),
        ];

        Self {
            vendor: None,
            products: DataTable::new(columns, Vec::new()).page_size(5),
        }
    }

    /// Load the vendor for a details route. An unknown id renders the
    /// not-found state.
    pub fn show(&mut self, id: u32) {
        self.vendor = data::vendors().into_iter().find(|v| v.id == id);
        self.products
            .set_rows(data::products().into_iter().filter(|p| p.vendor_id == id).collect());
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.products.handle_event(event)? {
            TableEvent::Action { id: "view", row } => {
                Some(Outcome::Goto(Route::ProductDetails(row.id)))
            }
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let Some(vendor) = &self.vendor else {
            render_not_found(buf, area, theme);
            return;
        };

        let label = Style::new().fg(theme.muted);
        let value = Style::new().fg(theme.text);

        let lines = [
            ("Email", vendor.email.to_string()),
            ("Category", vendor.category.to_string()),
            ("Joined", data::short_date(vendor.join_date)),
            ("Products", vendor.products_count.to_string()),
        ];

        buf.set_text(
            area.x,
            area.y,
            vendor.name,
            area.width,
            Style::new().fg(theme.text).bold(),
        );
        let status_color = match vendor.status {
            VendorStatus::Active => theme.success,
            VendorStatus::Inactive => theme.danger,
            VendorStatus::Pending => theme.warning,
        };
        buf.set_text(
            area.x + vendor.name.len() as u16 + 2,
            area.y,
            vendor.status.label(),
            area.width,
            Style::new().fg(status_color),
        );

        for (offset, (name, text)) in lines.iter().enumerate() {
            let line = area.row(offset as u16 + 2);
            if line.is_empty() {
                break;
            }
            buf.set_text(line.x, line.y, name, 10, label);
            buf.set_text(line.x + 11, line.y, text, line.width.saturating_sub(11), value);
        }

        let (_, rest) = area.split_top(lines.len() as u16 + 3);
        buf.set_text(
            rest.x,
            rest.y,
            "Products",
            rest.width,
            Style::new().fg(theme.text).bold(),
        );
        let (_, table_area) = rest.split_top(2);
        self.products.render(buf, table_area, &theme.table_style());
    }
}

fn render_not_found(buf: &mut Buffer, area: Rect, theme: &Theme) {
    buf.set_text(
        area.x,
        area.y,
        "Vendor not found",
        area.width,
        Style::new().fg(theme.text).bold(),
    );
    let line = area.row(1);
    buf.set_text(
        line.x,
        line.y,
        "The vendor you're looking for doesn't exist. Press Esc to go back.",
        line.width,
        Style::new().fg(theme.muted),
    );
}
