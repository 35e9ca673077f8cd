//! Static in-memory datasets backing every page. Nothing here persists;
//! deleting a row only edits the copy a page is holding.

mod categories;
mod products;
mod sales;
mod vendors;

pub use categories::{Category, CategoryStatus};
pub use products::{Product, StockStatus};
pub use sales::{PaymentMethod, ProductSale, Sale, SaleStatus};
pub use vendors::{Vendor, VendorStatus};

use chrono::NaiveDate;

pub fn categories() -> Vec<Category> {
    categories::all()
}

pub fn products() -> Vec<Product> {
    products::all()
}

pub fn sales() -> Vec<Sale> {
    sales::all()
}

pub fn product_sales(product_id: u32) -> Vec<ProductSale> {
    sales::history(product_id)
}

pub fn vendors() -> Vec<Vendor> {
    vendors::all()
}

/// Monthly revenue series for the dashboard chart.
pub fn monthly_revenue() -> Vec<(&'static str, i64)> {
    vec![
        ("Jan", 1500),
        ("Feb", 2300),
        ("Mar", 2800),
        ("Apr", 3500),
        ("May", 2900),
        ("Jun", 3800),
        ("Jul", 4200),
    ]
}

/// `$1,299` style money formatting, whole dollars.
pub fn dollars(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `Jun 1, 2023` style date formatting.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_grouping() {
        assert_eq!(dollars(0), "$0");
        assert_eq!(dollars(699), "$699");
        assert_eq!(dollars(1299), "$1,299");
        assert_eq!(dollars(487500), "$487,500");
        assert_eq!(dollars(-59), "-$59");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(date(2023, 6, 1)), "Jun 1, 2023");
    }
}
