//! Store capability
//!
//! The API layer never talks to a database directly. Every handler borrows a
//! `Store` and issues exactly one of the operations below.

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};

use super::errors::StoreResult;

/// A single table row as returned by the store
pub type Row = Map<String, Value>;

/// Boxed future returned by store operations
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Ordering applied to a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub descending: bool,
}

impl OrderBy {
    /// Order by `column`, newest/largest first
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }

    /// Order by `column`, smallest first
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }
}

/// Run a query against a named table.
///
/// Implementations must be shareable across concurrent requests; the
/// server holds one behind an `Arc<dyn Store>`.
pub trait Store: Send + Sync {
    /// Select every row of `table`, optionally ordered
    fn select<'a>(&'a self, table: &'a str, order: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>>;

    /// Count rows of `table` where `column == value`.
    ///
    /// `Ok(None)` means the store answered but reported no count.
    fn count_eq<'a>(
        &'a self,
        table: &'a str,
        column: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Option<u64>>;

    /// Insert one row, returning the stored row if the store sent it back
    fn insert<'a>(&'a self, table: &'a str, fields: Row) -> StoreFuture<'a, Option<Row>>;

    /// Overwrite the named fields of the row whose `id` matches
    fn update_by_id<'a>(
        &'a self,
        table: &'a str,
        id: &'a str,
        fields: Row,
    ) -> StoreFuture<'a, Option<Row>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
