//! Dashboard statistics
//!
//! Only `active_orders` comes from the store. Everything else is fixed
//! display data for the revenue chart and summary cards.

use serde::{Deserialize, Serialize};

/// Monthly revenue shown on the chart, January first
pub const MONTHLY_REVENUE: [i64; 12] = [
    12000, 19000, 3000, 5000, 2000, 3000, 15000, 21000, 24500, 28000, 22000, 35000,
];

pub const TOTAL_REVENUE_AMOUNT: &str = "$124,500";
pub const NEW_CUSTOMERS: i64 = 12;
pub const PENDING_REVIEWS: i64 = 4;

/// Response of `GET /api/dashboard/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub revenue: Vec<i64>,
    pub total_revenue_amount: String,
    pub active_orders: i64,
    pub new_customers: i64,
    pub pending_reviews: i64,
}

impl DashboardStats {
    /// Fixed figures plus the given active order count
    pub fn with_active_orders(active_orders: i64) -> Self {
        Self {
            revenue: MONTHLY_REVENUE.to_vec(),
            total_revenue_amount: TOTAL_REVENUE_AMOUNT.to_string(),
            active_orders,
            new_customers: NEW_CUSTOMERS,
            pending_reviews: PENDING_REVIEWS,
        }
    }
}
