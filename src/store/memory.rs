//! In-Memory Store
//!
//! Process-local tables implementing `Store`. Used by tests and by
//! `--memory-store` for running the dashboard without a hosted project.
//! Insert fills in `id` and `created_at` the way the hosted tables do.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::backend::{OrderBy, Row, Store, StoreFuture};
use super::errors::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    rows: HashMap<String, Vec<Row>>,
    /// Last `created_at` handed out; insert timestamps are strictly increasing
    last_created: Option<DateTime<Utc>>,
}

impl Tables {
    fn next_created_at(&mut self) -> String {
        let now = Utc::now().trunc_subsecs(6);
        let next = match self.last_created {
            Some(prev) if now <= prev => prev + chrono::Duration::microseconds(1),
            _ => now,
        };
        self.last_created = Some(next);
        next.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// In-memory table store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in `table`
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .map(|t| t.rows.get(table).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn do_select(&self, table: &str, order: Option<&OrderBy>) -> StoreResult<Vec<Row>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        let mut rows = tables.rows.get(table).cloned().unwrap_or_default();

        if let Some(order) = order {
            rows.sort_by(|a, b| {
                let cmp = compare_json_values(a.get(&order.column), b.get(&order.column));
                if order.descending {
                    cmp.reverse()
                } else {
                    cmp
                }
            });
        }

        Ok(rows)
    }

    fn do_count(&self, table: &str, column: &str, value: &str) -> StoreResult<Option<u64>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        let count = tables
            .rows
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.get(column).and_then(Value::as_str) == Some(value))
                    .count()
            })
            .unwrap_or(0);
        Ok(Some(count as u64))
    }

    fn do_insert(&self, table: &str, mut fields: Row) -> StoreResult<Option<Row>> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;

        if !fields.contains_key("id") {
            fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
        if !fields.contains_key("created_at") {
            let created_at = tables.next_created_at();
            fields.insert("created_at".to_string(), Value::String(created_at));
        }

        tables
            .rows
            .entry(table.to_string())
            .or_default()
            .push(fields.clone());
        Ok(Some(fields))
    }

    fn do_update(&self, table: &str, id: &str, fields: Row) -> StoreResult<Option<Row>> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let Some(rows) = tables.rows.get_mut(table) else {
            return Ok(None);
        };

        let found = rows
            .iter_mut()
            .find(|row| row.get("id").and_then(Value::as_str) == Some(id));

        Ok(found.map(|row| {
            row.extend(fields);
            row.clone()
        }))
    }
}

/// Order JSON values: null < bool < number < string; arrays/objects last
fn compare_json_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

impl Store for MemoryStore {
    fn select<'a>(&'a self, table: &'a str, order: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async move { self.do_select(table, order) })
    }

    fn count_eq<'a>(
        &'a self,
        table: &'a str,
        column: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Option<u64>> {
        Box::pin(async move { self.do_count(table, column, value) })
    }

    fn insert<'a>(&'a self, table: &'a str, fields: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async move { self.do_insert(table, fields) })
    }

    fn update_by_id<'a>(
        &'a self,
        table: &'a str,
        id: &'a str,
        fields: Row,
    ) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async move { self.do_update(table, id, fields) })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
