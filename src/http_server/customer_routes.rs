//! Customer HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::errors::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::state::ApiState;
use crate::models::{from_row, from_rows, Customer, CustomerCreate, CUSTOMERS_TABLE};
use crate::store::OrderBy;

/// Create customer routes
pub fn customer_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .with_state(state)
}

/// Newest customers first
async fn list_customers_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Customer>>> {
    let order = OrderBy::desc("created_at");
    let rows = state.store.select(CUSTOMERS_TABLE, Some(&order)).await?;
    Ok(Json(from_rows(rows)?))
}

async fn create_customer_handler(
    State(state): State<Arc<ApiState>>,
    ApiJson(request): ApiJson<CustomerCreate>,
) -> ApiResult<Json<Customer>> {
    let row = request.into_row()?;
    let created = state
        .store
        .insert(CUSTOMERS_TABLE, row)
        .await?
        .ok_or(ApiError::NotCreated("Could not create customer"))?;

    let customer: Customer = from_row(created)?;
    tracing::info!(customer_id = %customer.id, "customer created");
    Ok(Json(customer))
}
