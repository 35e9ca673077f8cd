//! Generic data-table widget for terminal dashboards.
//!
//! A [`DataTable`] takes an ordered set of rows (any type implementing
//! [`Record`]) and a list of [`Column`] descriptors, and owns the
//! interactive view state: search query, sort key and direction, current
//! page. On every state change the visible subset is re-derived from the
//! full row set by piping it through filter → sort → paginate, in that
//! order.
//!
//! The engines behind the widget are plain functions ([`filter`], [`sort`],
//! [`page`]) so their contracts can be tested in isolation; the widget
//! layers input handling and buffer rendering on top.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone)]
//! struct Vendor {
//!     name: String,
//!     products: i64,
//! }
//!
//! impl Record for Vendor {
//!     fn field(&self, key: &str) -> Option<Value> {
//!         match key {
//!             "name" => Some(Value::text(&self.name)),
//!             "products" => Some(Value::Int(self.products)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let table = DataTable::new(
//!     vec![
//!         Column::field("name", "Vendor Name", 30),
//!         Column::field("products", "Products", 10),
//!     ],
//!     vendors,
//! )
//! .searchable("name", "Search vendors…");
//! ```

pub mod column;
pub mod filter;
pub mod page;
pub mod record;
mod render;
pub mod search;
pub mod sort;
pub mod state;
pub mod table;

pub use column::{CellSource, Column, RowAction};
pub use record::{Record, Value};
pub use render::TableStyle;
pub use sort::Direction;
pub use state::ViewState;
pub use table::{DataTable, DerivedView, TableEvent};
