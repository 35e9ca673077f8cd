use tabular::{Column, DataTable, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, Style, TextAlign};

use crate::data::{self, Product, ProductSale, StockStatus};
use crate::pages::Outcome;
use crate::theme::Theme;

pub struct ProductDetailsPage {
    product: Option<Product>,
    history: DataTable<ProductSale>,
}

impl ProductDetailsPage {
    pub fn new(_theme: &Theme) -> Self {
        let columns = vec![
            Column::formatted("date", "Date", 13, |s: &ProductSale| {
                Span::raw(data::short_date(s.date))
            }),
            Column::field("quantity", "Quantity", 10).align(TextAlign::Right),
            Column::formatted("amount", "Amount", 10, |s: &ProductSale| {
                Span::raw(data::dollars(s.total_amount))
            })
            .align(TextAlign::Right),
            Column::field("customer", "Customer", 24),
        ];

        Self {
            product: None,
            history: DataTable::new(columns, Vec::new()).page_size(5),
        }
    }

    /// Load the product for a details route. An unknown id renders the
    /// not-found state.
    pub fn show(&mut self, id: u32) {
        self.product = data::products().into_iter().find(|p| p.id == id);
        self.history.set_rows(data::product_sales(id));
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.history.handle_event(event)? {
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let Some(product) = &self.product else {
            render_not_found(buf, area, theme);
            return;
        };

        let label = Style::new().fg(theme.muted);
        let value = Style::new().fg(theme.text);

        buf.set_text(
            area.x,
            area.y,
            product.name,
            area.width,
            Style::new().fg(theme.text).bold(),
        );
        let status_color = match product.status {
            StockStatus::InStock => theme.success,
            StockStatus::OutOfStock => theme.danger,
        };
        buf.set_text(
            area.x + product.name.len() as u16 + 2,
            area.y,
            product.status.label(),
            area.width,
            Style::new().fg(status_color),
        );

        let lines = [
            ("SKU", product.sku.to_string()),
            ("Vendor", product.vendor.to_string()),
            ("Category", product.category.to_string()),
            ("Price", data::dollars(product.price)),
            ("Stock", product.stock.to_string()),
            ("About", product.description.to_string()),
        ];
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
            "Sales History",
            rest.width,
            Style::new().fg(theme.text).bold(),
        );
        let (_, table_area) = rest.split_top(2);
        self.history.render(buf, table_area, &theme.table_style());
    }
}

fn render_not_found(buf: &mut Buffer, area: Rect, theme: &Theme) {
    buf.set_text(
        area.x,
        area.y,
        "Product not found",
        area.width,
        Style::new().fg(theme.text).bold(),
    );
    let line = area.row(1);
    buf.set_text(
        line.x,
        line.y,
        "The product you're looking for doesn't exist. Press Esc to go back.",
        line.width,
        Style::new().fg(theme.muted),
    );
}
