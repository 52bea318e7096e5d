//! # Store Module
//!
//! The data store capability the API depends on, plus two implementations:
//!
//! - `HostedStore` - PostgREST over HTTP (the production store)
//! - `MemoryStore` - process-local tables for development and tests

pub mod backend;
pub mod errors;
pub mod hosted;
pub mod memory;

pub use backend::{OrderBy, Row, Store, StoreFuture};
pub use errors::{StoreError, StoreResult};
pub use hosted::HostedStore;
pub use memory::MemoryStore;
