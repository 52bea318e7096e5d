//! # HTTP Server Module
//!
//! axum server for the service dashboard.
//!
//! # Endpoints
//!
//! - `/`, `/api`, `/health` - Liveness
//! - `/api/dashboard/stats` - Summary figures
//! - `/api/customers` - List / create customers
//! - `/api/orders` - List / create / update kanban orders

pub mod config;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod errors;
pub mod extract;
pub mod health_routes;
pub mod order_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::ApiState;
