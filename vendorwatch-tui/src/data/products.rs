use tabular::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub sku: &'static str,
    pub vendor: &'static str,
    pub vendor_id: u32,
    pub category: &'static str,
    pub price: i64,
    pub stock: i64,
    pub status: StockStatus,
    pub description: &'static str,
}

impl Record for Product {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::Int(self.id as i64)),
            "name" => Some(Value::text(self.name)),
            "sku" => Some(Value::text(self.sku)),
            "vendor" => Some(Value::text(self.vendor)),
            "category" => Some(Value::text(self.category)),
            "price" => Some(Value::Int(self.price)),
            "stock" => Some(Value::Int(self.stock)),
            "status" => Some(Value::text(self.status.label())),
            _ => None,
        }
    }
}

pub fn all() -> Vec<Product> {
    use StockStatus::*;
    vec![
        Product { id: 1, name: "Smartphone X", sku: "SP-001", vendor: "Tech Solutions Inc.", vendor_id: 1, category: "Electronics", price: 699, stock: 45, status: InStock, description: "The latest smartphone with cutting-edge features and exceptional camera quality." },
        Product { id: 2, name: "Laptop Pro", sku: "LT-002", vendor: "Tech Solutions Inc.", vendor_id: 1, category: "Electronics", price: 1299, stock: 23, status: InStock, description: "High-performance laptop for professionals and gamers with dedicated graphics." },
        Product { id: 3, name: "Designer T-Shirt", sku: "TS-003", vendor: "Fashion Forward", vendor_id: 2, category: "Clothing", price: 49, stock: 78, status: InStock, description: "Premium cotton t-shirt with exclusive designer prints." },
        Product { id: 4, name: "Leather Jacket", sku: "LJ-004", vendor: "Fashion Forward", vendor_id: 2, category: "Clothing", price: 199, stock: 12, status: InStock, description: "Genuine leather jacket with modern styling and premium finish." },
        Product { id: 5, name: "Organic Coffee", sku: "OC-005", vendor: "Gourmet Delights", vendor_id: 3, category: "Food", price: 15, stock: 56, status: InStock, description: "Fair trade organic coffee beans from sustainable farms." },
        Product { id: 6, name: "Chocolate Box", sku: "CB-006", vendor: "Gourmet Delights", vendor_id: 3, category: "Food", price: 29, stock: 0, status: OutOfStock, description: "Assorted pralines in a gift box." },
        Product { id: 7, name: "Sofa Set", sku: "SS-007", vendor: "Home Essentials", vendor_id: 4, category: "Furniture", price: 899, stock: 5, status: InStock, description: "Three-piece fabric sofa set for living rooms." },
        Product { id: 8, name: "Coffee Table", sku: "CT-008", vendor: "Home Essentials", vendor_id: 4, category: "Furniture", price: 249, stock: 8, status: InStock, description: "Solid oak coffee table with storage shelf." },
        Product { id: 9, name: "Camping Tent", sku: "CT-009", vendor: "Outdoor Adventures", vendor_id: 5, category: "Sports", price: 159, stock: 0, status: OutOfStock, description: "Four-person waterproof dome tent." },
        Product { id: 10, name: "Fishing Rod", sku: "FR-010", vendor: "Outdoor Adventures", vendor_id: 5, category: "Sports", price: 79, stock: 15, status: InStock, description: "Telescopic carbon fishing rod with reel." },
    ]
}
