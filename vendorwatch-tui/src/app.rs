//! Event loop, routing, and page dispatch.

use std::time::Duration;

use log::info;
use termbuf::{Buffer, Event, Key, Rect, Terminal};

use crate::error::AppError;
use crate::pages::{
    CategoriesPage, DashboardPage, Outcome, ProductDetailsPage, ProductsPage, SalesPage,
    SettingsPage, VendorDetailsPage, VendorsPage,
};
use crate::route::{Route, SECTIONS};
use crate::shell::Shell;
use crate::theme::Theme;

const TICK: Duration = Duration::from_millis(100);

pub struct App {
    route: Route,
    theme: Theme,
    shell: Shell,
    dashboard: DashboardPage,
    vendors: VendorsPage,
    products: ProductsPage,
    categories: CategoriesPage,
    sales: SalesPage,
    vendor_details: VendorDetailsPage,
    product_details: ProductDetailsPage,
    settings: SettingsPage,
}

impl App {
    pub fn new() -> Self {
        let theme = Theme::dark();
        Self {
            route: Route::Dashboard,
            shell: Shell::new(),
            dashboard: DashboardPage::new(&theme),
            vendors: VendorsPage::new(&theme),
            products: ProductsPage::new(&theme),
            categories: CategoriesPage::new(&theme),
            sales: SalesPage::new(&theme),
            vendor_details: VendorDetailsPage::new(&theme),
            product_details: ProductDetailsPage::new(&theme),
            settings: SettingsPage::new(),
            theme,
        }
    }

    pub fn run(mut self) -> Result<(), AppError> {
        let mut terminal = Terminal::new()?;
        info!("vendorwatch-tui started");

        loop {
            for event in terminal.poll(Some(TICK))? {
                if self.handle_event(&event) {
                    info!("quit requested");
                    return Ok(());
                }
            }
            terminal.draw(|buf| self.render(buf))?;
        }
    }

    /// Returns true when the app should quit.
    fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Key {
                key: Key::Char('q'),
                modifiers,
            } if modifiers.ctrl => return true,
            Event::Key { key: Key::Tab, .. } => {
                self.cycle_section(1);
                return false;
            }
            Event::Key {
                key: Key::BackTab, ..
            } => {
                self.cycle_section(-1);
                return false;
            }
            Event::Key {
                key: Key::Escape, ..
            } => {
                if let Some(parent) = self.route.parent() {
                    self.navigate(parent);
                    return false;
                }
            }
            Event::Click { x, y, .. } => {
                if let Some(route) = self.shell.route_at(x, y) {
                    self.navigate(route);
                    return false;
                }
            }
            _ => {}
        }

        if let Some(Outcome::Goto(route)) = self.dispatch(event) {
            self.navigate(route);
        }
        false
    }

    fn dispatch(&mut self, event: &Event) -> Option<Outcome> {
        match self.route {
            Route::Dashboard => self.dashboard.handle_event(event),
            Route::Vendors => self.vendors.handle_event(event),
            Route::Products => self.products.handle_event(event),
            Route::Categories => self.categories.handle_event(event),
            Route::Sales => self.sales.handle_event(event),
            Route::Settings => self.settings.handle_event(event),
            Route::VendorDetails(_) => self.vendor_details.handle_event(event),
            Route::ProductDetails(_) => self.product_details.handle_event(event),
        }
    }

    fn navigate(&mut self, route: Route) {
        info!("navigating to {route:?}");
        match route {
            Route::VendorDetails(id) => self.vendor_details.show(id),
            Route::ProductDetails(id) => self.product_details.show(id),
            _ => {}
        }
        self.route = route;
    }

    fn cycle_section(&mut self, delta: isize) {
        let current = SECTIONS
            .iter()
            .position(|section| *section == self.route.section())
            .unwrap_or(0);
        let len = SECTIONS.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.navigate(SECTIONS[next]);
    }

    fn render(&mut self, buf: &mut Buffer) {
        let area = Rect::from_size(buf.width(), buf.height());
        let content = self.shell.render(buf, area, self.route, &self.theme);

        match self.route {
            Route::Dashboard => self.dashboard.render(buf, content, &self.theme),
            Route::Vendors => self.vendors.render(buf, content, &self.theme),
            Route::Products => self.products.render(buf, content, &self.theme),
            Route::Categories => self.categories.render(buf, content, &self.theme),
            Route::Sales => self.sales.render(buf, content, &self.theme),
            Route::Settings => self.settings.render(buf, content, &self.theme),
            Route::VendorDetails(_) => self.vendor_details.render(buf, content, &self.theme),
            Route::ProductDetails(_) => self.product_details.render(buf, content, &self.theme),
        }
    }
}
