use tabular::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub products_count: i64,
    pub vendors_count: i64,
    pub status: CategoryStatus,
}

impl Record for Category {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::Int(self.id as i64)),
            "name" => Some(Value::text(self.name)),
            "slug" => Some(Value::text(self.slug)),
            "description" => Some(Value::text(self.description)),
            "products" => Some(Value::Int(self.products_count)),
            "vendors" => Some(Value::Int(self.vendors_count)),
            "status" => Some(Value::text(self.status.label())),
            _ => None,
        }
    }
}

pub fn all() -> Vec<Category> {
    use CategoryStatus::*;
    vec![
        Category { id: 1, name: "Electronics", slug: "electronics", description: "Electronic devices and gadgets", products_count: 156, vendors_count: 12, status: Active },
        Category { id: 2, name: "Clothing", slug: "clothing", description: "Apparel and fashion items", products_count: 243, vendors_count: 18, status: Active },
        Category { id: 3, name: "Food", slug: "food", description: "Food and beverage products", products_count: 98, vendors_count: 8, status: Active },
        Category { id: 4, name: "Furniture", slug: "furniture", description: "Home and office furniture", products_count: 76, vendors_count: 6, status: Active },
        Category { id: 5, name: "Sports", slug: "sports", description: "Sports equipment and gear", products_count: 112, vendors_count: 9, status: Active },
        Category { id: 6, name: "Cosmetics", slug: "cosmetics", description: "Beauty and personal care", products_count: 134, vendors_count: 11, status: Active },
        Category { id: 7, name: "Toys", slug: "toys", description: "Toys and games", products_count: 89, vendors_count: 7, status: Inactive },
        Category { id: 8, name: "Health", slug: "health", description: "Health and wellness products", products_count: 67, vendors_count: 5, status: Active },
        Category { id: 9, name: "Books", slug: "books", description: "Books and publications", products_count: 210, vendors_count: 4, status: Active },
        Category { id: 10, name: "Pet Supplies", slug: "pet-supplies", description: "Products for pets", products_count: 45, vendors_count: 3, status: Inactive },
    ]
}
