use chrono::NaiveDate;
use tabular::{Record, Value};

use super::date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorStatus {
    Active,
    Inactive,
    Pending,
}

impl VendorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub category: &'static str,
    pub status: VendorStatus,
    pub join_date: NaiveDate,
    pub products_count: i64,
}

impl Record for Vendor {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::Int(self.id as i64)),
            "name" => Some(Value::text(self.name)),
            "email" => Some(Value::text(self.email)),
            "category" => Some(Value::text(self.category)),
            "status" => Some(Value::text(self.status.label())),
            // ISO form so the text sort matches the chronological one.
            "join_date" => Some(Value::text(self.join_date.format("%Y-%m-%d").to_string())),
            "products" => Some(Value::Int(self.products_count)),
            _ => None,
        }
    }
}

pub fn all() -> Vec<Vendor> {
    use VendorStatus::*;
    vec![
        Vendor { id: 1, name: "Tech Solutions Inc.", email: "contact@techsolutions.com", category: "Electronics", status: Active, join_date: date(2023, 1, 15), products_count: 52 },
        Vendor { id: 2, name: "Fashion Forward", email: "info@fashionforward.com", category: "Clothing", status: Active, join_date: date(2023, 2, 28), products_count: 124 },
        Vendor { id: 3, name: "Gourmet Delights", email: "hello@gourmetdelights.com", category: "Food", status: Inactive, join_date: date(2023, 3, 10), products_count: 36 },
        Vendor { id: 4, name: "Home Essentials", email: "support@homeessentials.com", category: "Furniture", status: Active, join_date: date(2023, 4, 5), products_count: 87 },
        Vendor { id: 5, name: "Outdoor Adventures", email: "info@outdooradventures.com", category: "Sports", status: Pending, join_date: date(2023, 5, 12), products_count: 43 },
        Vendor { id: 6, name: "Digital Dynamics", email: "sales@digitaldynamics.com", category: "Electronics", status: Active, join_date: date(2023, 6, 18), products_count: 29 },
        Vendor { id: 7, name: "Beauty Boutique", email: "hello@beautyboutique.com", category: "Cosmetics", status: Active, join_date: date(2023, 7, 22), products_count: 64 },
        Vendor { id: 8, name: "Toy Emporium", email: "contact@toyemporium.com", category: "Toys", status: Inactive, join_date: date(2023, 8, 30), products_count: 78 },
        Vendor { id: 9, name: "Wellness World", email: "info@wellnessworld.com", category: "Health", status: Active, join_date: date(2023, 9, 14), products_count: 41 },
        Vendor { id: 10, name: "Book Haven", email: "books@bookhaven.com", category: "Books", status: Active, join_date: date(2023, 10, 3), products_count: 156 },
    ]
}
