//! Common helpers for endpoint tests.
//!
//! Builds routers over stub stores and drives them with `oneshot`.
//!
//! `#![allow(dead_code)]` because each test file is its own crate and uses
//! only part of these helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use service_dashboard_api::http_server::{HttpServer, HttpServerConfig};
use service_dashboard_api::store::{
    MemoryStore, OrderBy, Row, Store, StoreError, StoreFuture,
};

// =============================================================================
// Router Helpers
// =============================================================================

/// Router over `store` with the default server config
pub fn app(store: Arc<dyn Store>) -> Router {
    HttpServer::new(HttpServerConfig::default(), store).router()
}

/// Router over a fresh in-memory store
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app(store.clone()), store)
}

/// Send a request, returning status and JSON body (`Null` if empty)
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST a JSON body and expect 200
pub async fn post_ok(router: &Router, uri: &str, body: Value) -> Value {
    let (status, body) = send(router, json_request(Method::POST, uri, &body)).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    body
}

// =============================================================================
// Stub Stores
// =============================================================================

fn unavailable() -> StoreError {
    StoreError::Transport("connection refused".to_string())
}

/// Every call fails
pub struct FailingStore;

impl Store for FailingStore {
    fn select<'a>(&'a self, _: &'a str, _: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn count_eq<'a>(&'a self, _: &'a str, _: &'a str, _: &'a str) -> StoreFuture<'a, Option<u64>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn insert<'a>(&'a self, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn update_by_id<'a>(&'a self, _: &'a str, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Answers every call successfully but with nothing: no count, no rows
pub struct EmptyStore;

impl Store for EmptyStore {
    fn select<'a>(&'a self, _: &'a str, _: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn count_eq<'a>(&'a self, _: &'a str, _: &'a str, _: &'a str) -> StoreFuture<'a, Option<u64>> {
        Box::pin(async { Ok(None) })
    }

    fn insert<'a>(&'a self, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Ok(None) })
    }

    fn update_by_id<'a>(&'a self, _: &'a str, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Ok(None) })
    }

    fn name(&self) -> &'static str {
        "empty"
    }
}

/// Reports a fixed count for every count query
pub struct FixedCountStore(pub u64);

impl Store for FixedCountStore {
    fn select<'a>(&'a self, _: &'a str, _: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn count_eq<'a>(&'a self, _: &'a str, _: &'a str, _: &'a str) -> StoreFuture<'a, Option<u64>> {
        let count = self.0;
        Box::pin(async move { Ok(Some(count)) })
    }

    fn insert<'a>(&'a self, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Ok(None) })
    }

    fn update_by_id<'a>(&'a self, _: &'a str, _: &'a str, _: Row) -> StoreFuture<'a, Option<Row>> {
        Box::pin(async { Ok(None) })
    }

    fn name(&self) -> &'static str {
        "fixed-count"
    }
}

/// Memory store that remembers every payload it was asked to write
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    inserts: Mutex<Vec<(String, Row)>>,
    updates: Mutex<Vec<(String, String, Row)>>,
}

impl RecordingStore {
    pub fn inserts(&self) -> Vec<(String, Row)> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, String, Row)> {
        self.updates.lock().unwrap().clone()
    }
}

impl Store for RecordingStore {
    fn select<'a>(&'a self, table: &'a str, order: Option<&'a OrderBy>) -> StoreFuture<'a, Vec<Row>> {
        self.inner.select(table, order)
    }

    fn count_eq<'a>(
        &'a self,
        table: &'a str,
        column: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Option<u64>> {
        self.inner.count_eq(table, column, value)
    }

    fn insert<'a>(&'a self, table: &'a str, fields: Row) -> StoreFuture<'a, Option<Row>> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), fields.clone()));
        self.inner.insert(table, fields)
    }

    fn update_by_id<'a>(
        &'a self,
        table: &'a str,
        id: &'a str,
        fields: Row,
    ) -> StoreFuture<'a, Option<Row>> {
        self.updates
            .lock()
            .unwrap()
            .push((table.to_string(), id.to_string(), fields.clone()));
        self.inner.update_by_id(table, id, fields)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
