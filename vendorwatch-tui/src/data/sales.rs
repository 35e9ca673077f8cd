use chrono::NaiveDate;
use tabular::{Record, Value};

use super::date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Paypal => "PayPal",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: u32,
    pub order_id: &'static str,
    pub customer: &'static str,
    pub vendor: &'static str,
    pub vendor_id: u32,
    pub date: NaiveDate,
    pub amount: i64,
    pub status: SaleStatus,
    pub payment: PaymentMethod,
}

impl Record for Sale {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::Int(self.id as i64)),
            "order" => Some(Value::text(self.order_id)),
            "customer" => Some(Value::text(self.customer)),
            "vendor" => Some(Value::text(self.vendor)),
            "date" => Some(Value::text(self.date.format("%Y-%m-%d").to_string())),
            "amount" => Some(Value::Int(self.amount)),
            "status" => Some(Value::text(self.status.label())),
            "payment" => Some(Value::text(self.payment.label())),
            _ => None,
        }
    }
}

/// One line of a product's sales history.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSale {
    pub product_id: u32,
    pub date: NaiveDate,
    pub quantity: i64,
    pub total_amount: i64,
    pub customer: &'static str,
}

impl Record for ProductSale {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "date" => Some(Value::text(self.date.format("%Y-%m-%d").to_string())),
            "quantity" => Some(Value::Int(self.quantity)),
            "amount" => Some(Value::Int(self.total_amount)),
            "customer" => Some(Value::text(self.customer)),
            _ => None,
        }
    }
}

pub fn all() -> Vec<Sale> {
    use PaymentMethod::*;
    use SaleStatus::*;
    vec![
        Sale { id: 1, order_id: "ORD-001", customer: "John Doe", vendor: "Tech Solutions Inc.", vendor_id: 1, date: date(2023, 6, 1), amount: 699, status: Completed, payment: CreditCard },
        Sale { id: 2, order_id: "ORD-002", customer: "Jane Smith", vendor: "Tech Solutions Inc.", vendor_id: 1, date: date(2023, 6, 2), amount: 1299, status: Completed, payment: Paypal },
        Sale { id: 3, order_id: "ORD-003", customer: "Robert Johnson", vendor: "Fashion Forward", vendor_id: 2, date: date(2023, 6, 3), amount: 149, status: Pending, payment: CreditCard },
        Sale { id: 4, order_id: "ORD-004", customer: "Emily Davis", vendor: "Gourmet Delights", vendor_id: 3, date: date(2023, 6, 4), amount: 59, status: Completed, payment: CreditCard },
        Sale { id: 5, order_id: "ORD-005", customer: "Michael Wilson", vendor: "Home Essentials", vendor_id: 4, date: date(2023, 6, 5), amount: 899, status: Cancelled, payment: BankTransfer },
        Sale { id: 6, order_id: "ORD-006", customer: "Sarah Taylor", vendor: "Outdoor Adventures", vendor_id: 5, date: date(2023, 6, 6), amount: 159, status: Completed, payment: CreditCard },
        Sale { id: 7, order_id: "ORD-007", customer: "David Brown", vendor: "Tech Solutions Inc.", vendor_id: 1, date: date(2023, 6, 7), amount: 249, status: Completed, payment: Paypal },
        Sale { id: 8, order_id: "ORD-008", customer: "Jennifer Jones", vendor: "Fashion Forward", vendor_id: 2, date: date(2023, 6, 8), amount: 199, status: Pending, payment: CreditCard },
        Sale { id: 9, order_id: "ORD-009", customer: "Matthew Miller", vendor: "Gourmet Delights", vendor_id: 3, date: date(2023, 6, 9), amount: 29, status: Completed, payment: CreditCard },
        Sale { id: 10, order_id: "ORD-010", customer: "Laura Garcia", vendor: "Home Essentials", vendor_id: 4, date: date(2023, 6, 10), amount: 249, status: Completed, payment: Paypal },
    ]
}

/// Sales history lines for one product.
pub fn history(product_id: u32) -> Vec<ProductSale> {
    all_history()
        .into_iter()
        .filter(|sale| sale.product_id == product_id)
        .collect()
}

fn all_history() -> Vec<ProductSale> {
    vec![
        ProductSale { product_id: 1, date: date(2023, 8, 15), quantity: 5, total_amount: 3495, customer: "Retail Store A" },
        ProductSale { product_id: 1, date: date(2023, 7, 22), quantity: 3, total_amount: 2097, customer: "Online Store B" },
        ProductSale { product_id: 1, date: date(2023, 6, 10), quantity: 2, total_amount: 1398, customer: "Distribution Center C" },
        ProductSale { product_id: 1, date: date(2023, 5, 5), quantity: 10, total_amount: 6990, customer: "Wholesale Buyer D" },
        ProductSale { product_id: 1, date: date(2023, 4, 18), quantity: 1, total_amount: 699, customer: "Individual Customer E" },
        ProductSale { product_id: 2, date: date(2023, 8, 2), quantity: 2, total_amount: 2598, customer: "Online Store B" },
        ProductSale { product_id: 2, date: date(2023, 6, 28), quantity: 1, total_amount: 1299, customer: "Individual Customer F" },
        ProductSale { product_id: 3, date: date(2023, 7, 30), quantity: 24, total_amount: 1176, customer: "Retail Store A" },
        ProductSale { product_id: 5, date: date(2023, 8, 11), quantity: 40, total_amount: 600, customer: "Distribution Center C" },
    ]
}
