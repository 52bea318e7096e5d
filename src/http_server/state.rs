//! Shared Handler State

use std::sync::Arc;

use crate::store::Store;

/// State shared across handlers: just the store handle
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn Store>,
}

impl ApiState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
