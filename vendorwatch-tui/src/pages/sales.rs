use tabular::{Column, DataTable, TableEvent};
use termbuf::{Buffer, Event, Rect, Span, TextAlign};

use crate::data::{self, Sale, SaleStatus};
use crate::pages::{status_span, Outcome};
use crate::theme::Theme;
use crate::widgets::{render_card_row, StatCard};

pub struct SalesPage {
    table: DataTable<Sale>,
}

impl SalesPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;
        let warning = theme.warning;

        let columns = vec![
            Column::field("order", "Order ID", 10),
            Column::formatted("date", "Date", 13, |s: &Sale| {
                Span::raw(data::short_date(s.date))
            }),
            Column::field("customer", "Customer", 17),
            Column::field("vendor", "Vendor", 21),
            Column::formatted("amount", "Amount", 9, |s: &Sale| Span::raw(data::dollars(s.amount)))
                .align(TextAlign::Right),
            Column::formatted("status", "Status", 11, move |s: &Sale| {
                let color = match s.status {
                    SaleStatus::Completed => success,
                    SaleStatus::Pending => warning,
                    SaleStatus::Cancelled => danger,
                };
                status_span(s.status.label(), color)
            }),
            Column::field("payment", "Payment", 14),
        ];

        Self {
            table: DataTable::new(columns, data::sales())
                .searchable("order", "Search orders…")
                .page_size(6),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.table.handle_event(event)? {
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let cards = [
            StatCard::new("Total Revenue", data::dollars(95_235))
                .change("12%", true)
                .footer("Compared to last month"),
            StatCard::new("Orders", "342")
                .change("8%", true)
                .footer("Compared to last month"),
            StatCard::new("Customers", "2,541")
                .change("5%", true)
                .footer("Compared to last month"),
            StatCard::new("Conversion Rate", "3.2%")
                .change("0.5%", true)
                .footer("Compared to last month"),
        ];

        let (card_area, rest) = area.split_top(3);
        render_card_row(&cards, buf, card_area, theme);

        let (_, table_area) = rest.split_top(1);
        self.table.render(buf, table_area, &theme.table_style());
    }
}
