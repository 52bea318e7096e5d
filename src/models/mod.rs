//! # Dashboard Records
//!
//! Customers, orders and the dashboard summary, plus the create/update
//! payloads the API accepts. Rows from the store are coerced into these
//! types before they are returned.

pub mod customer;
pub mod dashboard;
pub mod errors;
pub mod fields;
pub mod order;

pub use customer::{Customer, CustomerCreate, CUSTOMERS_TABLE};
pub use dashboard::DashboardStats;
pub use errors::{ModelError, ModelResult};
pub use fields::{from_row, from_rows, to_row, Timestamp};
pub use order::{Order, OrderCreate, OrderUpdate, ORDERS_TABLE};
