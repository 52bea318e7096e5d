//! Order records (kanban work items)
//!
//! `status` and `priority` are free-form strings. The constants below are the
//! values the dashboard board uses; anything else is stored as given.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{ModelError, ModelResult};
use super::fields::{explicit, non_null, to_row, Timestamp};
use crate::store::Row;

/// Table holding orders
pub const ORDERS_TABLE: &str = "orders";

pub const STATUS_NEW_REQUESTS: &str = "new_requests";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_REVIEW: &str = "review";
pub const STATUS_COMPLETED: &str = "completed";

/// Board columns, left to right
pub const BOARD_STATUSES: [&str; 4] = [
    STATUS_NEW_REQUESTS,
    STATUS_IN_PROGRESS,
    STATUS_REVIEW,
    STATUS_COMPLETED,
];

pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_URGENT: &str = "urgent";

fn default_status() -> String {
    STATUS_NEW_REQUESTS.to_string()
}

fn default_priority() -> String {
    PRIORITY_NORMAL.to_string()
}

/// A persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
    pub created_at: Timestamp,
}

impl Order {
    /// True when `status` is one of the board columns
    pub fn is_on_board(&self) -> bool {
        BOARD_STATUSES.contains(&self.status.as_str())
    }
}

/// Body of `POST /api/orders`. Only fields the caller set are inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub title: String,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<Uuid>>,
}

impl OrderCreate {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyField("title"));
        }
        Ok(())
    }

    /// Validate and build the insert payload
    pub fn into_row(self) -> ModelResult<Row> {
        self.validate()?;
        to_row(&self)
    }
}

/// Body of `PATCH /api/orders/{id}`.
///
/// Only the listed columns may change; `id` and `created_at` are not
/// writable and unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderUpdate {
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<Uuid>>,
}

impl OrderUpdate {
    /// Move an order to another column
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.client_id.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
            && self.assigned_to.is_none()
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.is_empty() {
            return Err(ModelError::EmptyUpdate);
        }
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(ModelError::EmptyField("title"));
        }
        Ok(())
    }

    /// Validate and build the update payload
    pub fn into_row(self) -> ModelResult<Row> {
        self.validate()?;
        to_row(&self)
    }
}
