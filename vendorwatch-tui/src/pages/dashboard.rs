use tabular::{Column, DataTable, RowAction, TableEvent};
use termbuf::{Buffer, Event, Rect, Span};

use crate::data::{self, Vendor, VendorStatus};
use crate::pages::{status_span, Outcome};
use crate::route::Route;
use crate::theme::Theme;
use crate::widgets::{render_card_row, BarChart, StatCard};

pub struct DashboardPage {
    recent: DataTable<Vendor>,
    revenue: BarChart,
}

impl DashboardPage {
    pub fn new(theme: &Theme) -> Self {
        let success = theme.success;
        let danger = theme.danger;
        let warning = theme.warning;

        let columns = vec![
            Column::field("name", "Vendor", 22),
            Column::field("category", "Category", 13),
            Column::formatted("join_date", "Date Added", 14, |v: &Vendor| {
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
            Column::actions(6, vec![RowAction::new("view", "view")]),
        ];

        // Newest vendors first; the table's own sorting still applies on
        // top of this initial order.
        let mut vendors = data::vendors();
        vendors.sort_by(|a, b| b.join_date.cmp(&a.join_date));

        Self {
            recent: DataTable::new(columns, vendors).page_size(5),
            revenue: BarChart::new("Revenue Overview", data::monthly_revenue()),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        match self.recent.handle_event(event)? {
            TableEvent::Action { id: "view", row } => {
                Some(Outcome::Goto(Route::VendorDetails(row.id)))
            }
            TableEvent::Action { .. } => None,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let cards = [
            StatCard::new("Total Vendors", "124")
                .change("12%", true)
                .footer("12 new vendors this month"),
            StatCard::new("Total Products", "3,567")
                .change("8%", true)
                .footer("245 new products this month"),
            StatCard::new("Categories", "56")
                .change("3%", true)
                .footer("2 new categories this month"),
            StatCard::new("Total Sales", data::dollars(487_500))
                .change("5%", false)
                .footer("Down from last month"),
        ];

        let (card_area, rest) = area.split_top(3);
        render_card_row(&cards, buf, card_area, theme);

        let (_, rest) = rest.split_top(1);
        let (chart_area, table_side) = rest.split_left(44);

        self.revenue.render(buf, chart_area, theme);

        let table_area = table_side.shrink(0, 0, 0, 2);
        buf.set_text(
            table_area.x,
            table_area.y,
            "Recent Vendors",
            table_area.width,
            termbuf::Style::new().fg(theme.text).bold(),
        );
        let (_, below_title) = table_area.split_top(2);
        self.recent.render(buf, below_title, &theme.table_style());
    }
}
