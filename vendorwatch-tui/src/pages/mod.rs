//! One module per routed page. List pages own their table instance and
//! translate table action events into navigation or dataset edits.

mod categories;
mod dashboard;
mod product_details;
mod products;
mod sales;
mod settings;
mod vendor_details;
mod vendors;

pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use product_details::ProductDetailsPage;
pub use products::ProductsPage;
pub use sales::SalesPage;
pub use settings::SettingsPage;
pub use vendor_details::VendorDetailsPage;
pub use vendors::VendorsPage;

use termbuf::{Rgb, Span, Style};

use crate::route::Route;

/// What a page asks the app to do after handling an event.
pub enum Outcome {
    Goto(Route),
}

/// A colored status badge cell.
pub(crate) fn status_span(label: &'static str, color: Rgb) -> Span {
    Span::styled(label, Style::new().fg(color))
}
