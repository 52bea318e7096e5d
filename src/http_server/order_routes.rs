//! Order HTTP Routes
//!
//! Orders back the kanban board. The list is returned in store order; the
//! front end groups it into status columns.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use super::errors::{ApiError, ApiResult};
use super::extract::{ApiJson, ApiPath};
use super::state::ApiState;
use crate::models::{from_row, from_rows, Order, OrderCreate, OrderUpdate, ORDERS_TABLE};

/// Create order routes
pub fn order_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/orders", get(list_orders_handler).post(create_order_handler))
        .route("/orders/{order_id}", patch(update_order_handler))
        .with_state(state)
}

async fn list_orders_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Order>>> {
    let rows = state.store.select(ORDERS_TABLE, None).await?;
    Ok(Json(from_rows(rows)?))
}

async fn create_order_handler(
    State(state): State<Arc<ApiState>>,
    ApiJson(request): ApiJson<OrderCreate>,
) -> ApiResult<Json<Order>> {
    let row = request.into_row()?;
    let created = state
        .store
        .insert(ORDERS_TABLE, row)
        .await?
        .ok_or(ApiError::NotCreated("Could not create order"))?;

    let order: Order = from_row(created)?;
    tracing::info!(order_id = %order.id, status = %order.status, "order created");
    Ok(Json(order))
}

async fn update_order_handler(
    State(state): State<Arc<ApiState>>,
    ApiPath(order_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<OrderUpdate>,
) -> ApiResult<Json<Order>> {
    let row = request.into_row()?;
    let id = order_id.to_string();
    let updated = state
        .store
        .update_by_id(ORDERS_TABLE, &id, row)
        .await?
        .ok_or(ApiError::NotFound("Order not found"))?;

    let order: Order = from_row(updated)?;
    tracing::info!(order_id = %order.id, status = %order.status, "order updated");
    Ok(Json(order))
}
