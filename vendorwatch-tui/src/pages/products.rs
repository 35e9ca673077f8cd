use log::info;
use tabular::{Column, DataTable, RowAction, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, TextAlign};

use crate::data::{self, Product, StockStatus};
use crate::pages::{status_span, Outcome};
use crate::route::Route;
use crate::theme::Theme;

pub struct ProductsPage {
    table: DataTable<Product>,
}

impl ProductsPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;

        let columns = vec![
            Column::field("name", "Product Name", 20),
            Column::field("sku", "SKU", 8),
            Column::field("vendor", "Vendor", 22),
            Column::field("category", "Category", 13),
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
            Column::actions(
                13,
                vec![RowAction::new("view", "view"), RowAction::new("delete", "del")],
            ),
        ];

        Self {
            table: DataTable::new(columns, data::products())
                .searchable("name", "Search products…")
                .page_size(8),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.table.handle_event(event)? {
            TableEvent::Action { id: "view", row } => {
                Some(Outcome::Goto(Route::ProductDetails(row.id)))
            }
            TableEvent::Action { id: "delete", row } => {
                info!("deleting product '{}'", row.name);
                self.table.retain(|p| p.id != row.id);
                None
            }
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.table.render(buf, area, &theme.table_style());
    }
}
