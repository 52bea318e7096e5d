//! Observability: `tracing` subscriber setup

pub mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
