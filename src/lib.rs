//! service-dashboard-api - CRUD backend for a service-business dashboard
//!
//! Customers, kanban orders and dashboard figures over HTTP. Persistence is
//! delegated to a hosted PostgREST store through the `store::Store`
//! capability.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod models;
pub mod observability;
pub mod store;
